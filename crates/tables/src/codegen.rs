// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Writes the tables as Rust source.
use std::io::{self, Write};

use crate::Tables;

/// Values per line in the generated arrays.
const ROW_LEN: usize = 16;

impl Tables {
    /// Writes the tables as `pub(crate) static` arrays to be `include!`d by a
    /// crate, the arrays are named `FLUSHES`, `UNIQUE5`, `HASH_VALUES`, and
    /// `HASH_ADJUST`.
    pub fn write_rust<W: Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(w, "// Generated by quintet-tables, do not edit.")?;
        write_array(w, "FLUSHES", &self.flushes)?;
        write_array(w, "UNIQUE5", &self.unique5)?;
        write_array(w, "HASH_VALUES", &self.hash_values)?;
        write_array(w, "HASH_ADJUST", &self.hash_adjust)
    }
}

fn write_array<W: Write>(w: &mut W, name: &str, values: &[u16]) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "pub(crate) static {name}: [u16; {}] = [", values.len())?;
    for row in values.chunks(ROW_LEN) {
        let row = row.iter().map(u16::to_string).collect::<Vec<_>>();
        writeln!(w, "    {},", row.join(", "))?;
    }
    writeln!(w, "];")
}
