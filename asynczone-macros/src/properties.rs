use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Error, Fields, LitStr};

#[derive(Default)]
struct FieldOptions {
    rename: Option<String>,
    skip: bool,
}

pub fn derive_properties_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(Error::new_spanned(
                    name,
                    "Properties can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new_spanned(
                name,
                "Properties can only be derived for structs",
            ))
        }
    };

    let case = container_case(&input.attrs)?;

    let mut inserts = vec![];
    for field in fields {
        let options = field_options(&field.attrs)?;
        if options.skip {
            continue;
        }
        let Some(field_name) = field.ident.as_ref() else {
            continue;
        };
        let key = match (options.rename, case) {
            (Some(rename), _) => rename,
            (None, Some(case)) => field_name.to_string().to_case(case),
            (None, None) => field_name.to_string(),
        };
        inserts.push(quote! {
            properties.insert(
                ::std::string::String::from(#key),
                ::serde_json::Value::from(self.#field_name),
            );
        });
    }

    Ok(quote! {
        impl #impl_generics ::asynczone_core::IntoProperties for #name #ty_generics #where_clause {
            fn into_properties(self) -> ::asynczone_core::Properties {
                let mut properties = ::asynczone_core::Properties::new();
                #(#inserts)*
                properties
            }
        }
    })
}

fn container_case(attrs: &[Attribute]) -> syn::Result<Option<Case>> {
    let mut case = None;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("properties")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                let value: LitStr = meta.value()?.parse()?;
                case = Some(match value.value().as_str() {
                    "camel" => Case::Camel,
                    "snake" => Case::Snake,
                    "kebab" => Case::Kebab,
                    "pascal" => Case::Pascal,
                    other => {
                        return Err(meta.error(format!("Unknown rename_all case: {}", other)))
                    }
                });
                Ok(())
            } else {
                Err(meta.error("Unknown properties attribute"))
            }
        })?;
    }
    Ok(case)
}

fn field_options(attrs: &[Attribute]) -> syn::Result<FieldOptions> {
    let mut options = FieldOptions::default();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("property")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                options.skip = true;
                Ok(())
            } else if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                options.rename = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("Unknown property attribute"))
            }
        })?;
    }
    Ok(options)
}
