use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::parse::{Parse, ParseStream};
use syn::{
    FnArg, GenericParam, ImplItem, ImplItemFn, ItemImpl, LitStr, Path, ReturnType, Type,
    TypeParamBound, parse_quote,
};

use crate::marker::take_marker;

/// Arguments accepted by `#[annotated(...)]`.
pub(crate) struct AnnotatedArgs {
    /// Path to the runtime crate, `::tagwrap_core` unless overridden.
    krate: Path,
}

impl Parse for AnnotatedArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.is_empty() {
            return Ok(Self {
                krate: parse_quote!(::tagwrap_core),
            });
        }
        let _crate_token: syn::Token![crate] = input.parse()?;
        let _eq_token: syn::Token![=] = input.parse()?;
        let krate: Path = input.parse()?;
        if !input.is_empty() {
            return Err(input.error("unexpected tokens, expected `crate = path`"));
        }
        Ok(Self { krate })
    }
}

/// How the generated invoker calls a tagged method.
struct TaggedCall {
    /// Method takes the output stream as its only argument.
    takes_output: bool,
    /// Method returns `Result<(), E>` rather than `()`.
    fallible: bool,
}

pub(crate) fn expand_annotated(args: AnnotatedArgs, mut input: ItemImpl) -> syn::Result<TokenStream> {
    if let Some((_, path, _)) = &input.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "`#[annotated]` can only be used on inherent `impl` blocks, not trait implementations.",
        ));
    }
    let krate = &args.krate;

    // Walk methods in declaration order, stripping markers as we go
    let mut entries = Vec::new();
    for item in &mut input.items {
        let ImplItem::Fn(func) = item else {
            continue;
        };
        let label = take_marker(&mut func.attrs)?;
        let name = func.sig.ident.to_string();

        match label {
            None => {
                // Associated functions without a receiver are not methods
                if func.sig.receiver().is_some() {
                    entries.push(quote! { #krate::MethodEntry::plain(#name) });
                }
            }
            Some(label) => {
                let call = check_tagged(func)?;
                entries.push(tagged_entry(krate, func, &name, &label, &call));
            }
        }
    }

    let self_ty = &input.self_ty;
    let mut generics = input.generics.clone();
    let type_params: Vec<_> = generics.type_params().map(|p| p.ident.clone()).collect();
    if !type_params.is_empty() {
        let where_clause = generics.make_where_clause();
        for ident in type_params {
            where_clause.predicates.push(parse_quote!(#ident: 'static));
        }
    }
    let (impl_generics, _, where_clause) = generics.split_for_impl();

    Ok(quote! {
        #input

        impl #impl_generics #krate::Annotated for #self_ty #where_clause {
            fn method_table() -> #krate::MethodTable<Self> {
                #krate::MethodTable::declared(::std::vec![#(#entries),*])
            }
        }
    })
}

fn check_tagged(func: &ImplItemFn) -> syn::Result<TaggedCall> {
    let sig = &func.sig;

    let Some(receiver) = sig.receiver() else {
        return Err(syn::Error::new_spanned(
            &sig.ident,
            "tagged methods must take `&self`",
        ));
    };
    if receiver.reference.is_none() || receiver.mutability.is_some() || receiver.colon_token.is_some() {
        return Err(syn::Error::new_spanned(
            receiver,
            "tagged methods must take `&self`",
        ));
    }
    if let Some(asyncness) = &sig.asyncness {
        return Err(syn::Error::new_spanned(
            asyncness,
            "tagged methods cannot be `async`",
        ));
    }
    if let Some(param) = sig
        .generics
        .params
        .iter()
        .find(|p| !matches!(p, GenericParam::Lifetime(_)))
    {
        return Err(syn::Error::new_spanned(
            param,
            "tagged methods cannot have type or const parameters",
        ));
    }

    let extra: Vec<&FnArg> = sig.inputs.iter().skip(1).collect();
    let takes_output = match extra.as_slice() {
        [] => false,
        [FnArg::Typed(arg)] => {
            if !is_output_stream(&arg.ty) {
                return Err(syn::Error::new_spanned(
                    &arg.ty,
                    "the only parameter a tagged method takes is the output stream, `&mut dyn std::io::Write`",
                ));
            }
            true
        }
        [_, second, ..] => {
            return Err(syn::Error::new_spanned(
                second,
                "tagged methods take no arguments besides the output stream",
            ));
        }
        [other] => {
            return Err(syn::Error::new_spanned(
                other,
                "expected the output stream parameter",
            ));
        }
    };

    let fallible = match &sig.output {
        ReturnType::Default => false,
        ReturnType::Type(_, ty) if is_unit(ty) => false,
        ReturnType::Type(_, ty) if is_result(ty) => true,
        ReturnType::Type(_, ty) => {
            return Err(syn::Error::new_spanned(
                ty,
                "tagged methods return `()` or `Result<(), E>`",
            ));
        }
    };

    Ok(TaggedCall {
        takes_output,
        fallible,
    })
}

fn is_unit(ty: &Type) -> bool {
    matches!(strip_parens(ty), Type::Tuple(t) if t.elems.is_empty())
}

fn strip_parens(ty: &Type) -> &Type {
    match ty {
        Type::Paren(p) => strip_parens(&p.elem),
        Type::Group(g) => strip_parens(&g.elem),
        other => other,
    }
}

/// `&mut dyn Write`, with any path to `Write`.
///
/// Extra auto-trait bounds are refused: the invoker only has a plain
/// `&mut dyn Write` to hand over.
fn is_output_stream(ty: &Type) -> bool {
    let Type::Reference(r) = strip_parens(ty) else {
        return false;
    };
    if r.mutability.is_none() {
        return false;
    }
    let Type::TraitObject(obj) = strip_parens(&r.elem) else {
        return false;
    };
    let mut traits = obj.bounds.iter().filter_map(|bound| match bound {
        TypeParamBound::Trait(t) => Some(t),
        _ => None,
    });
    match (traits.next(), traits.next()) {
        (Some(t), None) => t
            .path
            .segments
            .last()
            .is_some_and(|seg| seg.ident == "Write"),
        _ => false,
    }
}

/// `Result<..>`, `io::Result<..>` or any other path ending in `Result`.
fn is_result(ty: &Type) -> bool {
    let Type::Path(p) = strip_parens(ty) else {
        return false;
    };
    p.qself.is_none()
        && p.path
            .segments
            .last()
            .is_some_and(|seg| seg.ident == "Result")
}

fn tagged_entry(
    krate: &Path,
    func: &ImplItemFn,
    name: &str,
    label: &LitStr,
    call: &TaggedCall,
) -> TokenStream {
    let ident = &func.sig.ident;
    let out = format_ident!("__tagwrap_out");
    let this = format_ident!("__tagwrap_this");

    let args = if call.takes_output {
        quote! { #out }
    } else {
        quote! {}
    };
    let discard = if call.takes_output {
        quote! {}
    } else {
        quote! { let _ = #out; }
    };
    let body = if call.fallible {
        quote! {
            #this.#ident(#args).map_err(::std::convert::Into::into)
        }
    } else {
        quote! {
            #this.#ident(#args);
            ::std::result::Result::Ok(())
        }
    };

    quote! {
        #krate::MethodEntry::tagged(
            #name,
            #krate::Marker::from_static(#label),
            |#this: &Self, #out: &mut dyn ::std::io::Write| -> ::std::result::Result<(), #krate::MethodError> {
                #discard
                #body
            },
        )
    }
}
