use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::ReturnType;

pub(crate) trait ReturnTypeEx {
    /// Get the statements that turn the dispatched `value` into the result of
    /// the method.
    fn to_dispatch_return(&self, krate: &Ident, value: TokenStream) -> TokenStream;
}

impl ReturnTypeEx for ReturnType {
    fn to_dispatch_return(&self, krate: &Ident, value: TokenStream) -> TokenStream {
        match self {
            ReturnType::Default => quote! {
                let _ = #value;
            },
            ReturnType::Type(_, ty) => quote! {
                #krate::mock::returned::<#ty>(#value)
            },
        }
    }
}
