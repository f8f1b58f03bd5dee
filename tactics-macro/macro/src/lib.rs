#[macro_use]
extern crate quote;

use proc_macro::TokenStream;
use regex::Regex;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Ident, ItemEnum, Meta, NestedMeta};

/// Splits `CamelCase` identifier into lowercase words: `GroundSafe` -> `["ground", "safe"]`.
fn words(ident: &Ident) -> Vec<String> {
	let re = Regex::new(r"[A-Z0-9]{1}[a-z0-9]*").unwrap();
	re.find_iter(&ident.to_string())
		.map(|m| m.as_str().to_ascii_lowercase())
		.collect()
}

/// Derives `FromStr` for fieldless enums.
///
/// Accepts variant names as written (`GroundSafe`) and in snake or kebab case
/// (`ground_safe`, `ground-safe`). With `#[enum_from_str(use_primitives)]`
/// numeric strings are converted through `FromPrimitive::from_i64`.
#[proc_macro_derive(FromStr, attributes(enum_from_str))]
pub fn enum_from_str_derive(input: TokenStream) -> TokenStream {
	let item = parse_macro_input!(input as DeriveInput);
	let data = match item.data {
		Data::Enum(data) => data,
		_ => panic!("Can only derive FromStr for enums"),
	};

	let name = item.ident;
	let variants = data.variants.iter().map(|v| &v.ident).collect::<Vec<_>>();
	let snake = variants.iter().map(|v| words(v).join("_")).collect::<Vec<_>>();
	let kebab = variants.iter().map(|v| words(v).join("-")).collect::<Vec<_>>();

	let use_primitives = |a: &Attribute| {
		if !a.path.is_ident("enum_from_str") {
			return false;
		}
		match a.parse_meta() {
			Ok(Meta::List(list)) => list.nested.iter().any(|n| {
				matches!(n, NestedMeta::Meta(Meta::Path(path)) if path.is_ident("use_primitives"))
			}),
			_ => panic!("No options found in attribute `enum_from_str`"),
		}
	};
	let other_cases = if item.attrs.iter().any(use_primitives) {
		quote! {
			n => {
				if let Ok(num) = n.parse::<i64>() {
					if let Some(result) = <Self as num_traits::FromPrimitive>::from_i64(num) {
						return Ok(result);
					}
				}
				return Err(sc2_tactics_macro::ParseEnumError);
			}
		}
	} else {
		quote! {_ => return Err(sc2_tactics_macro::ParseEnumError)}
	};

	TokenStream::from(quote! {
		impl std::str::FromStr for #name {
			type Err = sc2_tactics_macro::ParseEnumError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				#(
					if s == stringify!(#variants) || s == #snake || s == #kebab {
						return Ok(Self::#variants);
					}
				)*
				Ok(match s {
					#other_cases,
				})
			}
		}
	})
}

/// Adds `is_<variant>` checkers to enum (e.g. `Visibility::FullHidden` -> `is_full_hidden`).
#[proc_macro_attribute]
pub fn variant_checkers(_attr: TokenStream, item: TokenStream) -> TokenStream {
	let item = parse_macro_input!(item as ItemEnum);

	let name = &item.ident;
	let variants = item.variants.iter().map(|v| &v.ident);
	let checkers = variants
		.clone()
		.map(|v| format_ident!("is_{}", words(v).join("_")));

	TokenStream::from(quote! {
		#item
		impl #name {
			#(
				#[inline]
				pub fn #checkers(self) -> bool {
					matches!(self, Self::#variants)
				}
			)*
		}
	})
}
