use std::any::{type_name, TypeId};
use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use parking_lot::RwLock;

/// Declare `Sub` as a subtype of `Super`.
///
/// Rust has no inheritance, so relations between types are registered
/// explicitly. `Super` may be a trait object, which is the usual way to
/// express "any implementor of this trait":
///
/// ```
/// use seqmock::{declare_subtype, of_type, Matcher, Value};
///
/// trait Shape {}
///
/// #[derive(Debug, PartialEq)]
/// struct Circle;
///
/// impl Shape for Circle {}
///
/// declare_subtype::<Circle, dyn Shape>();
///
/// assert!(of_type::<dyn Shape>().matches(&Value::new(Circle)));
/// ```
///
/// Relations are transitive and stored for the whole process.
pub fn declare_subtype<Sub, Super>()
where
    Sub: ?Sized + 'static,
    Super: ?Sized + 'static,
{
    let sub = TypeId::of::<Sub>();
    let sup = TypeId::of::<Super>();

    if sub == sup {
        return;
    }

    tracing::trace!(
        sub = type_name::<Sub>(),
        sup = type_name::<Super>(),
        "declare subtype"
    );

    SUPERTYPES.write().entry(sub).or_default().insert(sup);
}

/// Returns `true` if `sub` is `sup` or was declared (transitively) as subtype
/// of `sup`, `false` otherwise.
#[must_use]
pub fn is_subtype_of(sub: TypeId, sup: TypeId) -> bool {
    if sub == sup {
        return true;
    }

    let supertypes = SUPERTYPES.read();
    let mut visited = HashSet::new();
    let mut pending = vec![sub];

    while let Some(current) = pending.pop() {
        if !visited.insert(current) {
            continue;
        }

        if let Some(parents) = supertypes.get(&current) {
            if parents.contains(&sup) {
                return true;
            }

            pending.extend(parents.iter().copied());
        }
    }

    false
}

static SUPERTYPES: Lazy<RwLock<HashMap<TypeId, HashSet<TypeId>>>> = Lazy::new(Default::default);
