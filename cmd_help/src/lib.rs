use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DataEnum, DeriveInput, Expr, ExprLit, Fields, Lit, Meta, Variant, parse_macro_input};

/// 提取`///`文档，每行去掉`///`之后紧跟的一个空格。
fn doc_of(attrs: &[Attribute]) -> String {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(ExprLit { lit: Lit::Str(s), .. }) => Some(s.value()),
                _ => None,
            },
            _ => None,
        })
        .map(|line| line.strip_prefix(' ').map(str::to_owned).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// 匹配任意字段的变体模式。
fn wildcard_pattern(variant: &Variant) -> proc_macro2::TokenStream {
    let name = &variant.ident;
    match &variant.fields {
        Fields::Unit => quote! { #name },
        Fields::Unnamed(_) => quote! { #name(..) },
        Fields::Named(_) => quote! { #name { .. } },
    }
}

/// 为枚举生成`help(&self)`和`all_help()`，帮助信息来自每个变体的文档注释。
#[proc_macro_derive(CmdHelp)]
pub fn cmd_help_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let enum_name = &input.ident;

    let Data::Enum(DataEnum { variants, .. }) = &input.data else {
        return syn::Error::new_spanned(enum_name, "CmdHelp can only be derived on enums").to_compile_error().into();
    };

    let docs = variants.iter().map(|v| doc_of(&v.attrs)).collect::<Vec<_>>();
    let patterns = variants.iter().map(wildcard_pattern);
    let names = variants.iter().map(|v| v.ident.to_string());
    let help_docs = docs.iter();
    let all_docs = docs.iter();

    let expanded = quote! {
        impl #enum_name {
            /// 获取帮助信息。
            #[allow(dead_code)]
            pub fn help(&self) -> &'static str {
                match self {
                    #(Self::#patterns => #help_docs,)*
                }
            }

            /// 获取全部帮助信息：[(name, help), ...]
            #[allow(dead_code)]
            pub fn all_help() -> &'static [(&'static str, &'static str)] {
                &[#((#names, #all_docs)),*]
            }
        }
    };

    TokenStream::from(expanded)
}
