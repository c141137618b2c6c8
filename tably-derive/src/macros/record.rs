use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::parse::ParseStream;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, LitStr, parse_quote, parse2};

const EXPECTED: &str = "expected a string literal or `skip`";

/// Parsed `#[table(...)]` attribute.
enum TableAttr {
    Tag(LitStr),
    Skip,
}

/// Derive macro for the Record trait.
///
/// Every named field becomes a column keyed by its name, typed through
/// `tably::IntoValue::SEMANTIC_TYPE`, unless marked `#[table(skip)]`.
pub fn expand(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match parse2(input) {
        Ok(i) => i,
        Err(e) => return e.to_compile_error(),
    };

    match expand_record(&input) {
        Ok(tokens) => tokens,
        Err(e) => e.to_compile_error(),
    }
}

fn expand_record(input: &DeriveInput) -> syn::Result<TokenStream> {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "#[derive(Record)] requires a struct with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "#[derive(Record)] can only be used on structs",
            ));
        }
    };

    let mut descriptors = Vec::new();
    let mut lookups = Vec::new();
    let mut field_types = Vec::new();

    for field in fields {
        let Some(ident) = &field.ident else {
            continue;
        };
        let tag = match table_attr(&field.attrs)? {
            Some(TableAttr::Skip) => continue,
            Some(TableAttr::Tag(tag)) => Some(tag),
            None => None,
        };

        let ty = &field.ty;
        let key = ident.unraw().to_string();

        let descriptor = quote! {
            ::tably::FieldDescriptor::new(#key, <#ty as ::tably::IntoValue>::SEMANTIC_TYPE)
        };
        descriptors.push(match tag {
            Some(tag) => quote! { #descriptor.with_tag(#tag) },
            None => descriptor,
        });
        lookups.push(quote! {
            #key => ::std::option::Option::Some(::tably::IntoValue::to_value(&self.#ident)),
        });
        field_types.push(ty.clone());
    }

    let name = &input.ident;
    let mut generics = input.generics.clone();
    if !generics.params.is_empty() {
        let where_clause = generics.make_where_clause();
        for ty in &field_types {
            where_clause
                .predicates
                .push(parse_quote!(#ty: ::tably::IntoValue));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::tably::Record for #name #ty_generics #where_clause {
            fn fields(&self) -> ::std::vec::Vec<::tably::FieldDescriptor> {
                ::std::vec![#(#descriptors),*]
            }

            fn field(&self, key: &str) -> ::std::option::Option<::tably::Value> {
                match key {
                    #(#lookups)*
                    _ => ::std::option::Option::None,
                }
            }
        }
    })
}

/// Reads the single `#[table(...)]` attribute of a field, if any.
fn table_attr(attrs: &[Attribute]) -> syn::Result<Option<TableAttr>> {
    let mut found = None;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("table")) {
        if found.is_some() {
            return Err(syn::Error::new_spanned(attr, "duplicate #[table] attribute"));
        }
        found = Some(attr.parse_args_with(parse_table_attr)?);
    }
    Ok(found)
}

fn parse_table_attr(input: ParseStream) -> syn::Result<TableAttr> {
    if input.peek(LitStr) {
        return Ok(TableAttr::Tag(input.parse()?));
    }
    if input.peek(Ident) {
        let ident: Ident = input.parse()?;
        if ident == "skip" {
            return Ok(TableAttr::Skip);
        }
        return Err(syn::Error::new(ident.span(), EXPECTED));
    }
    Err(input.error(EXPECTED))
}
