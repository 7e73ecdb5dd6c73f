use std::mem::take;

use syn::{Attribute, LitStr, Result as ParseResult};

pub(crate) trait AttribsEx {
    /// Remove all `#[seqmock(..)]` attributes and return the call name they
    /// define, if any.
    fn take_call_name(&mut self) -> ParseResult<Option<LitStr>>;
}

impl AttribsEx for Vec<Attribute> {
    fn take_call_name(&mut self) -> ParseResult<Option<LitStr>> {
        let mut name = None;

        for attr in take(self) {
            if !attr.path().is_ident("seqmock") {
                self.push(attr);

                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    name = Some(meta.value()?.parse::<LitStr>()?);

                    Ok(())
                } else {
                    Err(meta.error("Unknown seqmock attribute!"))
                }
            })?;
        }

        Ok(name)
    }
}
