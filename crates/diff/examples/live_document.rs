use anyhow::Result;
use line_diff::{patch_text, DiffDocument, Side};

fn main() -> Result<()> {
    let mut document = DiffDocument::new(
        "fn main() {\n    println!(\"Hello, world!\");\n}\n",
        "fn main() {\n    println!(\"Hello, world!\");\n}\n",
    );
    println!("revision {}: {}", document.revision(), document.result().stats);

    // Type a comment into the new text
    document.insert(Side::New, 12, "    // Print a greeting\n")?;
    println!("revision {}: {}", document.revision(), document.result().stats);

    document.set_new_text("fn main() {\n    let name = \"Rust\";\n    println!(\"Hello, {}!\", name);\n}\n");
    println!("revision {}: {}", document.revision(), document.result().stats);

    println!("\n{}", patch_text(document.result()));
    Ok(())
}
