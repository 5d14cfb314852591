use proc_macro::TokenStream;

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse_macro_input, Data, DeriveInput, Fields as SynFields, GenericArgument, LitStr,
    PathArguments, Type,
};

/// The primitive types that can be losslessly (or with the usual `as` rounding) exposed as `f64`.
const NUMERIC_TYPES: [&str; 12] = [
    "f64", "f32", "i8", "i16", "i32", "i64", "isize", "u8", "u16", "u32", "u64", "usize",
];

/// How a struct field is exposed by the generated `field` method.
enum FieldKind {
    /// A plain numeric field, always available.
    Number,
    /// An `Option` wrapping a numeric type. `None` is reported as a missing field.
    OptionalNumber,
}

/// Derive `northfront::core::Fields` for a struct with named fields. Every numeric field
/// (`f64`, `u64`, ...) and every `Option` of a numeric type becomes available by its name; other
/// fields are ignored.
///
/// Field can be renamed with `#[fields(rename = "lat")]` or hidden with `#[fields(skip)]`.
#[proc_macro_derive(Fields, attributes(fields))]
pub fn derive_fields(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand_fields(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand_fields(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            SynFields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Fields can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "Fields can only be derived for structs",
            ))
        }
    };

    let mut arms = Vec::new();
    let mut keys = Vec::new();
    for field in named {
        // named fields always have an ident
        let Some(ident) = &field.ident else {
            continue;
        };

        let mut skip = false;
        let mut key = ident.to_string();
        for attr in field.attrs.iter().filter(|a| a.path().is_ident("fields")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    skip = true;
                    Ok(())
                } else if meta.path.is_ident("rename") {
                    let value: LitStr = meta.value()?.parse()?;
                    key = value.value();
                    Ok(())
                } else {
                    Err(meta.error("unsupported fields attribute, use `skip` or `rename`"))
                }
            })?;
        }
        if skip {
            continue;
        }

        match field_kind(&field.ty) {
            Some(FieldKind::Number) => {
                arms.push(quote! { #key => Some(self.#ident as f64), });
            }
            Some(FieldKind::OptionalNumber) => {
                arms.push(quote! { #key => self.#ident.map(|v| v as f64), });
            }
            None => continue,
        }
        keys.push(key);
    }

    Ok(quote! {
        impl #impl_generics ::northfront::core::Fields for #name #ty_generics #where_clause {
            fn field(&self, key: &str) -> Option<f64> {
                match key {
                    #(#arms)*
                    _ => None,
                }
            }

            fn field_names(&self) -> Vec<&'static str> {
                vec![#(#keys),*]
            }
        }
    })
}

/// Classify a field type. Returns `None` when the type cannot be exposed as a number.
fn field_kind(ty: &Type) -> Option<FieldKind> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    let ident = segment.ident.to_string();

    if NUMERIC_TYPES.contains(&ident.as_str()) {
        return Some(FieldKind::Number);
    }
    if ident == "Option" {
        if let PathArguments::AngleBracketed(args) = &segment.arguments {
            if let Some(GenericArgument::Type(inner)) = args.args.first() {
                if let Some(FieldKind::Number) = field_kind(inner) {
                    return Some(FieldKind::OptionalNumber);
                }
            }
        }
    }
    None
}
