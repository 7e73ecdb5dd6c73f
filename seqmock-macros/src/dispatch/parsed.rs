use proc_macro2::{Span, TokenStream};
use quote::ToTokens;
use syn::{
    parse::{Parse, ParseStream},
    parse2, Error, ImplItem, ItemImpl, Result as ParseResult, TraitItemFn,
};

use crate::misc::{ident_seqmock, AttribsEx};

use super::method::DispatchMethod;

/// Parsed code inside the dispatch! macro
pub(crate) struct Parsed {
    pub impls: Vec<ItemImpl>,
}

impl Parsed {
    pub(crate) fn render(self) -> ParseResult<TokenStream> {
        let krate = ident_seqmock();
        let mut tokens = TokenStream::new();

        for mut impl_ in self.impls {
            impl_.items = impl_
                .items
                .into_iter()
                .map(|item| match item {
                    ImplItem::Verbatim(ts) => {
                        let method = parse2::<TraitItemFn>(ts)?;

                        Ok(ImplItem::Fn(DispatchMethod::render(&krate, method)?))
                    }
                    ImplItem::Fn(mut method) => {
                        method.attrs.take_call_name()?;

                        Ok(ImplItem::Fn(method))
                    }
                    item => Ok(item),
                })
                .collect::<ParseResult<_>>()?;

            impl_.to_tokens(&mut tokens);
        }

        Ok(tokens)
    }
}

impl Parse for Parsed {
    fn parse(input: ParseStream<'_>) -> ParseResult<Self> {
        let mut impls = Vec::new();

        while !input.is_empty() {
            let impl_ = input.parse::<ItemImpl>()?;

            if impl_.trait_.is_none() {
                return Err(Error::new_spanned(
                    &impl_.self_ty,
                    "Expected trait implementation!",
                ));
            }

            impls.push(impl_);
        }

        if impls.is_empty() {
            return Err(Error::new(
                Span::call_site(),
                "Expected at least one trait implementation!",
            ));
        }

        Ok(Self { impls })
    }
}
