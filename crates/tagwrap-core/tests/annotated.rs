use std::cell::Cell;
use std::fmt;
use std::io::{self, Write};

use tagwrap_core::prelude::*;
use tagwrap_core::{MethodEntry, ScanError};

struct Sample {
    plain_calls: Cell<u32>,
}

#[annotated]
impl Sample {
    fn new() -> Self {
        Self {
            plain_calls: Cell::new(0),
        }
    }

    #[marker(label = "MyGeneratedClass")]
    fn my_function(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "This is the core functionality of myFunction.")
    }

    fn helper(&self) {
        self.plain_calls.set(self.plain_calls.get() + 1);
    }

    #[marker(label = "AnotherGeneratedClass")]
    fn another_function(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "This is the core functionality of anotherFunction.")
    }
}

struct Silent;

#[annotated]
impl Silent {
    #[marker(label = "Quiet")]
    fn nothing(&self) {}
}

struct Untagged;

#[annotated]
impl Untagged {
    fn a(&self) {}
    fn b(&self) -> u8 {
        1
    }
}

#[derive(Debug)]
struct Refused;

impl fmt::Display for Refused {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("refused")
    }
}

impl std::error::Error for Refused {}

struct Flaky;

#[annotated]
impl Flaky {
    #[marker(label = "Fails")]
    fn fails(&self, out: &mut dyn Write) -> Result<(), Refused> {
        let _ = writeln!(out, "partial output");
        Err(Refused)
    }

    #[marker(label = "Unreached")]
    fn unreached(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "should not run")
    }
}

fn scan<T: Annotated>(target: &T) -> (Result<ScanReport, ScanError>, String) {
    let mut buf = Vec::new();
    let res = Scanner::default().process(target, &mut buf);
    (res, String::from_utf8(buf).unwrap())
}

#[test]
fn table_follows_declaration_order() {
    let table = Sample::method_table();
    let names: Vec<_> = table.iter().map(MethodEntry::name).collect();
    assert_eq!(names, ["my_function", "helper", "another_function"]);

    let labels: Vec<_> = table
        .tagged()
        .filter_map(MethodEntry::marker)
        .map(Marker::label)
        .collect();
    assert_eq!(labels, ["MyGeneratedClass", "AnotherGeneratedClass"]);
}

#[test]
fn demo_scenario_output() {
    let sample = Sample::new();
    let (res, out) = scan(&sample);
    let report = res.unwrap();

    let expected = "\
Generated class: MyGeneratedClass
Before method call: running boilerplate code
This is the core functionality of myFunction.
After method call: running boilerplate code

Generated class: AnotherGeneratedClass
Before method call: running boilerplate code
This is the core functionality of anotherFunction.
After method call: running boilerplate code
";
    assert_eq!(out, expected);
    assert_eq!(report.len(), 2);
    assert_eq!(out.matches("This is the core functionality of myFunction.").count(), 1);
    assert_eq!(sample.plain_calls.get(), 0, "untagged method must not run");
}

#[test]
fn object_without_tagged_methods_prints_nothing() {
    let (res, out) = scan(&Untagged);

    assert!(res.unwrap().is_empty());
    assert!(out.is_empty());
    assert_eq!(Untagged::method_table().len(), 2);
}

#[test]
fn unit_methods_are_wrapped() {
    let (res, out) = scan(&Silent);
    res.unwrap();

    assert_eq!(
        out,
        "Generated class: Quiet\n\
         Before method call: running boilerplate code\n\
         After method call: running boilerplate code\n"
    );
}

#[test]
fn failing_method_aborts_scan() {
    let (res, out) = scan(&Flaky);

    let err = res.unwrap_err();
    assert_eq!(err.method(), Some("fails"));
    assert!(err.to_string().contains("refused"), "unexpected error: {err}");

    assert!(out.ends_with("partial output\n"), "unexpected output: {out:?}");
    assert!(!out.contains("After method call"));
    assert!(!out.contains("Unreached"));
}

#[test]
fn scanning_twice_is_idempotent() {
    let sample = Sample::new();
    let (first, a) = scan(&sample);
    let (second, b) = scan(&sample);

    assert_eq!(first.unwrap(), second.unwrap());
    assert_eq!(a, b);
}
