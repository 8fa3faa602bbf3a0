//! Built-in enumerations installed into every new [`Registry`].

use tierwise_explore::leaves::numeric::{floats, ints};
use tierwise_explore::leaves::text::strings;
use tierwise_explore::{lists, maps, product_all, sets, NumericMode, Tiers};
use tierwise_ir::types::ids;
use tierwise_ir::{TypeDesc, Value};

use crate::registry::Registry;

pub(crate) fn install(registry: &mut Registry, mode: NumericMode) {
    registry.register(
        TypeDesc::scalar(ids::BOOL),
        Tiers::from_choices(vec![Value::Bool(false), Value::Bool(true)]),
    );
    registry.register(TypeDesc::scalar(ids::NONE), Tiers::from_value(Value::None));
    registry.register(TypeDesc::scalar(ids::STR), strings().map(Value::Str));
    registry.register(
        TypeDesc::scalar(ids::BYTES),
        strings().map(|s| Value::Bytes(s.into_bytes())),
    );
    registry.set_numeric_mode(mode);

    registry.register_builder(ids::LIST, Some(1), |args| lists(&args[0]).map(Value::List));
    registry.register_builder(ids::TUPLE, None, |args| {
        product_all(args.to_vec()).map(Value::Tuple)
    });
    registry.register_builder(ids::SET, Some(1), |args| sets(&args[0]).map(Value::Set));
    registry.register_builder(ids::DICT, Some(2), |args| {
        maps(&args[0], &args[1]).map(Value::Map)
    });
    // `None` is the smallest option; a present value sits one size above
    // itself.
    registry.register_builder(ids::OPTION, Some(1), |args| {
        Tiers::from_value(Value::None).choice(&args[0].delay())
    });
}

/// Registers `int`, `float` and `range` restricted to `mode`.
pub(crate) fn install_numeric(registry: &mut Registry, mode: NumericMode) {
    registry.register(TypeDesc::scalar(ids::INT), ints(mode).map(Value::Int));
    registry.register(TypeDesc::scalar(ids::FLOAT), floats(mode).map(Value::Float));
    registry.register(
        TypeDesc::scalar(ids::RANGE),
        ints(mode).product_with(&ints(mode), |&start, &end| Value::Range { start, end }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_cover_builtin_ids() {
        let registry = Registry::new();
        for id in [ids::BOOL, ids::INT, ids::FLOAT, ids::STR, ids::BYTES, ids::NONE, ids::RANGE] {
            assert!(registry.is_registered(&TypeDesc::scalar(id)), "missing {id}");
        }
        for origin in [ids::LIST, ids::TUPLE, ids::SET, ids::DICT, ids::OPTION] {
            assert!(registry.has_builder(origin), "missing {origin}");
        }
    }

    #[test]
    fn test_bytes_follow_strings() {
        let registry = Registry::new();
        let bytes = registry.resolve(&TypeDesc::scalar(ids::BYTES)).unwrap().take(3);
        assert_eq!(
            bytes,
            vec![Value::Bytes(vec![]), Value::Bytes(b"a".to_vec()), Value::Bytes(b"aa".to_vec())]
        );
    }

    #[test]
    fn test_range_pairs_ints() {
        let registry = Registry::new();
        let ranges = registry.resolve(&TypeDesc::scalar(ids::RANGE)).unwrap().take(3);
        assert_eq!(
            ranges,
            vec![
                Value::Range { start: 0, end: 0 },
                Value::Range { start: 0, end: 1 },
                Value::Range { start: 1, end: 0 },
            ]
        );
    }

    #[test]
    fn test_option_puts_none_first() {
        let registry = Registry::new();
        let tiers = registry
            .resolve(&TypeDesc::option(TypeDesc::bool()))
            .unwrap()
            .take_tiers(3);
        assert_eq!(
            tiers,
            vec![vec![Value::None], vec![Value::Bool(false), Value::Bool(true)]]
        );
    }
}
