// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Lookup tables generated by the build script.
include!(concat!(env!("OUT_DIR"), "/tables.rs"));

#[cfg(test)]
mod tests {
    use super::*;
    use quintet_tables::Tables;

    #[test]
    fn embedded_tables_match_builder() {
        let tables = Tables::build().unwrap();
        assert_eq!(FLUSHES, tables.flushes);
        assert_eq!(UNIQUE5, tables.unique5);
        assert_eq!(HASH_VALUES, tables.hash_values);
        assert_eq!(HASH_ADJUST, tables.hash_adjust);
    }
}
