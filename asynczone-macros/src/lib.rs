use proc_macro::TokenStream;

mod properties;

/// Derive `asynczone_core::IntoProperties` for a struct with named fields.
///
/// Each field becomes one zone property, converted with
/// `serde_json::Value::from`. `#[property(rename = "key")]` and
/// `#[property(skip)]` adjust single fields; `#[properties(rename_all = "camel")]`
/// recases every key (`camel`, `snake`, `kebab` or `pascal`).
///
/// The expansion refers to `::serde_json`, so the deriving crate must depend
/// on `serde_json`.
#[proc_macro_derive(Properties, attributes(properties, property))]
pub fn derive_properties(input: TokenStream) -> TokenStream {
    properties::derive_properties_impl(input)
}
