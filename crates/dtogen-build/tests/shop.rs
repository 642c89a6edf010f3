use dtogen_build::{FsSink, MemorySink, Processor};
use dtogen_schema::load::load_files;
use std::{fs, path::PathBuf};

fn shop_schema() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../schema/demo/shop.toml")
}

#[test]
fn demo_shop_generates_every_dto() {
    let schema = load_files(&[shop_schema()]).unwrap();
    let mut processor = Processor::new(&schema, MemorySink::new());

    let report = processor.process(schema.classes());
    assert!(!report.has_errors(), "{:?}", report.diagnostics);

    let mut emitted = report.emitted.clone();
    emitted.sort();
    assert_eq!(
        emitted,
        vec![
            "com.acme.shop.OrderDTO",
            "com.acme.shop.ProductBaseDTO",
            "com.acme.shop.ProductCardDTO",
            "com.acme.shop.ProductFullDTO",
            "com.acme.shop.ProductInternalDTO",
        ]
    );

    let sink = processor.into_sink();

    let order = sink.get("com.acme.shop.OrderDTO").unwrap();
    assert!(order.contains(
        "public record OrderDTO(int id, double total, int customer, java.util.List<java.lang.Integer> lines)"
    ));
    assert!(order.contains(
        "original.getLines().stream().map(com.acme.shop.OrderLine::getLineNo).toList()"
    ));
    assert!(!order.contains("secretNote"));

    let full = sink.get("com.acme.shop.ProductFullDTO").unwrap();
    assert!(full.contains("(String name, java.math.BigDecimal price, long id)"));

    let base = sink.get("com.acme.shop.ProductBaseDTO").unwrap();
    assert!(base.contains("(String name, java.math.BigDecimal price)"));

    let internal = sink.get("com.acme.shop.ProductInternalDTO").unwrap();
    assert!(internal.contains("(java.math.BigDecimal supplierCost)"));
}

#[test]
fn demo_shop_writes_source_tree() {
    let schema = load_files(&[shop_schema()]).unwrap();
    let out = tempfile::tempdir().unwrap();

    let report = Processor::new(&schema, FsSink::new(out.path())).process(schema.annotated());
    assert!(!report.has_errors(), "{:?}", report.diagnostics);

    let order = fs::read_to_string(out.path().join("com/acme/shop/OrderDTO.java")).unwrap();
    assert!(order.starts_with("package com.acme.shop;\n\n"));

    // a second pass into the same tree collides with every unit
    let again = Processor::new(&schema, FsSink::new(out.path())).process(schema.annotated());
    assert!(again.emitted.is_empty());
    assert_eq!(again.diagnostics.error_count(), 2);
}
