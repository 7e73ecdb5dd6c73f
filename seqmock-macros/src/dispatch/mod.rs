mod method;
mod parsed;

use proc_macro2::TokenStream;
use syn::parse2;

use parsed::Parsed;

pub(crate) fn exec(input: TokenStream) -> TokenStream {
    let parsed = match parse2::<Parsed>(input) {
        Ok(parsed) => parsed,
        Err(err) => return err.to_compile_error(),
    };

    let tokens = match parsed.render() {
        Ok(tokens) => tokens,
        Err(err) => return err.to_compile_error(),
    };

    #[cfg(feature = "debug")]
    println!("\ndispatch!:\n{tokens:#}\n");

    tokens
}
