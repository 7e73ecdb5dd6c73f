use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::{Error, FnArg, Pat, Result as ParseResult, Type};

pub(crate) trait FnArgEx {
    /// Get the tokens that convert the argument into a `seqmock::Arg`, `None`
    /// for the receiver.
    fn to_dispatch_arg(&self, krate: &Ident) -> ParseResult<Option<TokenStream>>;
}

impl FnArgEx for FnArg {
    fn to_dispatch_arg(&self, krate: &Ident) -> ParseResult<Option<TokenStream>> {
        let FnArg::Typed(arg) = self else {
            return Ok(None);
        };

        let Pat::Ident(pat) = &*arg.pat else {
            return Err(Error::new_spanned(
                &arg.pat,
                "dispatch! requires plain identifiers as argument names",
            ));
        };

        let ident = &pat.ident;

        let tokens = if let Type::Reference(_) = &*arg.ty {
            quote!(#krate::Arg::value(::std::borrow::ToOwned::to_owned(&*#ident)))
        } else {
            quote!(#krate::Arg::value(#ident))
        };

        Ok(Some(tokens))
    }
}
