use std::io::{self, Write};

use tagwrap_core::annotated;

/// Object whose marked methods the demo wraps with boilerplate.
pub struct DemoObject {
    name: &'static str,
}

#[annotated]
impl DemoObject {
    pub fn new() -> Self {
        Self { name: "demo" }
    }

    #[marker(label = "MyGeneratedClass")]
    pub fn my_function(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "This is the core functionality of myFunction.")
    }

    #[marker(label = "AnotherGeneratedClass")]
    pub fn another_function(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "This is the core functionality of anotherFunction.")
    }

    /// Not marked; listed in the method table but never invoked by the scanner.
    pub fn name(&self) -> &'static str {
        self.name
    }
}
