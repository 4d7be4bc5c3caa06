//! 组件注册宏实现

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{
    parse::Parse, parse::ParseStream, parse_macro_input, punctuated::Punctuated, Attribute, Error,
    Expr, Ident, ItemStruct, Lit, Meta, Result, Token,
};

/// 组件角色
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ComponentKind {
    DataAccess,
    BusinessLogic,
}

/// 组件配置参数
#[derive(Debug, Clone, Default)]
pub struct ComponentArgs {
    /// 组件角色
    pub kind: Option<ComponentKind>,
    /// 自定义组件名称
    pub name: Option<String>,
    /// 是否为首选
    pub primary: bool,
    /// 注入的数据访问组件名称
    pub inject: Option<String>,
}

fn string_value(expr: Expr, key: &str) -> Result<String> {
    match expr {
        Expr::Lit(expr_lit) => match expr_lit.lit {
            Lit::Str(lit_str) => Ok(lit_str.value()),
            other => Err(Error::new(other.span(), format!("`{}` 需要字符串字面量", key))),
        },
        other => Err(Error::new_spanned(other, format!("`{}` 需要字符串字面量", key))),
    }
}

impl Parse for ComponentArgs {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let mut args = ComponentArgs::default();

        let parsed = Punctuated::<Meta, Token![,]>::parse_terminated(input)?;

        for meta in parsed {
            match meta {
                Meta::Path(path) => {
                    let kind = if path.is_ident("data_access") {
                        ComponentKind::DataAccess
                    } else if path.is_ident("business_logic") {
                        ComponentKind::BusinessLogic
                    } else if path.is_ident("primary") {
                        args.primary = true;
                        continue;
                    } else {
                        return Err(Error::new_spanned(path, "未知的组件参数"));
                    };

                    if args.kind.replace(kind).is_some() {
                        return Err(Error::new_spanned(
                            path,
                            "只能指定一个角色: data_access 或 business_logic",
                        ));
                    }
                }
                Meta::NameValue(nv) => {
                    if nv.path.is_ident("name") {
                        args.name = Some(string_value(nv.value, "name")?);
                    } else if nv.path.is_ident("inject") {
                        args.inject = Some(string_value(nv.value, "inject")?);
                    } else {
                        return Err(Error::new_spanned(nv.path, "未知的组件参数"));
                    }
                }
                Meta::List(list) => {
                    return Err(Error::new_spanned(list, "未知的组件参数"));
                }
            }
        }

        Ok(args)
    }
}

/// 取结构体文档注释的首个非空行作为组件描述
fn doc_summary(attrs: &[Attribute]) -> Option<String> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(expr_lit) => match &expr_lit.lit {
                    Lit::Str(lit_str) => Some(lit_str.value()),
                    _ => None,
                },
                _ => None,
            },
            _ => None,
        })
        .map(|line| line.trim().to_string())
        .find(|line| !line.is_empty())
}

impl ComponentArgs {
    /// 校验参数组合
    fn kind(&self) -> Result<ComponentKind> {
        let kind = self.kind.ok_or_else(|| {
            Error::new(
                Span::call_site(),
                "#[component] 需要指定角色: data_access 或 business_logic",
            )
        })?;

        if kind == ComponentKind::DataAccess && self.inject.is_some() {
            return Err(Error::new(
                Span::call_site(),
                "`inject` 只能用于 business_logic 组件",
            ));
        }

        Ok(kind)
    }
}

/// 实现 #[component] 宏
pub fn component_impl(args: TokenStream, input: TokenStream) -> TokenStream {
    let component_args = match syn::parse::<ComponentArgs>(args) {
        Ok(args) => args,
        Err(e) => return e.to_compile_error().into(),
    };

    let input_struct = parse_macro_input!(input as ItemStruct);

    match expand(&component_args, &input_struct) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(args: &ComponentArgs, input_struct: &ItemStruct) -> Result<proc_macro2::TokenStream> {
    let kind = args.kind()?;

    if !input_struct.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input_struct.generics,
            "#[component] 不支持泛型结构体",
        ));
    }

    let struct_name = &input_struct.ident;
    let struct_name_string = struct_name.to_string();
    let component_name = args.name.as_deref().unwrap_or(&struct_name_string);

    let (role, factory) = match kind {
        ComponentKind::DataAccess => (
            quote! { ::infrastructure_common::ComponentRole::DataAccess },
            quote! { ::di_abstractions::ComponentFactory::of_data_access::<#struct_name> },
        ),
        ComponentKind::BusinessLogic => (
            quote! { ::infrastructure_common::ComponentRole::BusinessLogic },
            quote! { ::di_abstractions::ComponentFactory::of_business_logic::<#struct_name> },
        ),
    };

    let primary = args.primary;
    let inject = match &args.inject {
        Some(inject) => quote! { ::core::option::Option::Some(#inject) },
        None => quote! { ::core::option::Option::None },
    };
    let description = match doc_summary(&input_struct.attrs) {
        Some(description) => quote! { ::core::option::Option::Some(#description) },
        None => quote! { ::core::option::Option::None },
    };

    let entry_name = Ident::new(
        &format!(
            "__COMPONENT_CATALOG_ENTRY_{}",
            struct_name_string.to_uppercase()
        ),
        Span::call_site(),
    );

    Ok(quote! {
        #input_struct

        impl ::infrastructure_common::Component for #struct_name {
            fn name(&self) -> &'static str {
                #component_name
            }
        }

        // 链接期收集到组件目录
        #[::di_abstractions::linkme::distributed_slice(::di_abstractions::COMPONENT_CATALOG)]
        #[linkme(crate = ::di_abstractions::linkme)]
        #[doc(hidden)]
        static #entry_name: ::di_abstractions::CatalogEntry = ::di_abstractions::CatalogEntry {
            name: #component_name,
            type_path: ::core::concat!(::core::module_path!(), "::", #struct_name_string),
            role: #role,
            primary: #primary,
            inject: #inject,
            description: #description,
            factory: #factory,
        };
    })
}
