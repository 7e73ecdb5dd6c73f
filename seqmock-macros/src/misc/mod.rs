mod attribs_ex;
mod fn_arg_ex;
mod return_type_ex;

use proc_macro2::Ident;
use quote::format_ident;

pub(crate) use attribs_ex::AttribsEx;
pub(crate) use fn_arg_ex::FnArgEx;
pub(crate) use return_type_ex::ReturnTypeEx;

#[cfg(feature = "force-name")]
pub(crate) fn ident_seqmock() -> Ident {
    format_ident!("seqmock")
}

#[cfg(not(feature = "force-name"))]
pub(crate) fn ident_seqmock() -> Ident {
    use proc_macro_crate::{crate_name, FoundCrate};

    match crate_name("seqmock") {
        Ok(FoundCrate::Itself) => format_ident!("crate"),
        Ok(FoundCrate::Name(name)) => format_ident!("{name}"),
        Err(_) => format_ident!("seqmock"),
    }
}
