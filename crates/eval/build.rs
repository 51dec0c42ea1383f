// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Builds the evaluator lookup tables and writes them to `$OUT_DIR/tables.rs`.
use anyhow::{Context, Result};
use std::{
    env,
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use quintet_tables::Tables;

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=build.rs");

    let tables = Tables::build().context("Failed to build the evaluator tables")?;

    let path = PathBuf::from(env::var("OUT_DIR")?).join("tables.rs");
    let file = File::create(&path).with_context(|| format!("Failed to create {path:?}"))?;

    let mut w = BufWriter::new(file);
    tables.write_rust(&mut w)?;
    w.flush()?;

    Ok(())
}
