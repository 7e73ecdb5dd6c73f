use proc_macro2::Ident;
use quote::quote;
use syn::{
    parse2, parse_quote, Block, Error, FnArg, ImplItemFn, Result as ParseResult, TraitItemFn,
    Visibility,
};

use crate::misc::{AttribsEx, FnArgEx, ReturnTypeEx};

pub(crate) struct DispatchMethod;

impl DispatchMethod {
    /// Render the body of a method that forwards the call to
    /// `Dispatch::invoke` of the receiver.
    pub(crate) fn render(krate: &Ident, method: TraitItemFn) -> ParseResult<ImplItemFn> {
        let TraitItemFn { mut attrs, sig, .. } = method;

        let name = attrs
            .take_call_name()?
            .map_or_else(|| sig.ident.to_string(), |name| name.value());

        if let Some(asyncness) = &sig.asyncness {
            return Err(Error::new_spanned(
                asyncness,
                "dispatch! does not support async methods",
            ));
        }

        let Some(FnArg::Receiver(receiver)) = sig.inputs.first() else {
            return Err(Error::new_spanned(
                &sig,
                "dispatch! requires methods with a `self` receiver",
            ));
        };

        let this = if receiver.reference.is_none() && receiver.colon_token.is_none() {
            quote!(&self)
        } else {
            quote!(&*self)
        };

        let args = sig
            .inputs
            .iter()
            .map(|arg| arg.to_dispatch_arg(krate))
            .collect::<ParseResult<Vec<_>>>()?
            .into_iter()
            .flatten();

        let value = quote! {
            <Self as #krate::Dispatch>::invoke(
                #this,
                #name,
                #krate::Args::from(::std::vec![ #( #args ),* ]),
            )
        };

        let body = sig.output.to_dispatch_return(krate, value);
        let block = parse2::<Block>(quote!({ #body }))?;

        attrs.push(parse_quote!(#[allow(unused_mut)]));

        Ok(ImplItemFn {
            attrs,
            vis: Visibility::Inherited,
            defaultness: None,
            sig,
            block,
        })
    }
}
