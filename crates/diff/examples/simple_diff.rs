use line_diff::{compute_diff, render, DiffLineKind, ViewMode, ViewOptions};

fn main() {
    // Two sample texts to compare
    let text1 = "This is the first line.\nHere is the second line.\nAnd the third line.";
    let text2 = "This is the first line.\nThis is a completely different second line.\nAnd the third line.\nPlus a new fourth line.";

    let result = compute_diff(text1, text2);

    // Unified view
    println!("{}", render(&result, &ViewOptions::new().color(true)));

    // Split view
    let split = ViewOptions::new()
        .mode(ViewMode::Split)
        .column_width(48)
        .color(true);
    println!("\n{}", render(&result, &split));

    // Walk the lines directly
    println!("\nLine by line:");
    for line in result.lines() {
        match line.kind {
            DiffLineKind::Removed => println!("  \x1b[31mRemoved\x1b[0m   {}", line.content),
            DiffLineKind::Added => println!("  \x1b[32mAdded\x1b[0m     {}", line.content),
            DiffLineKind::Unchanged => println!("  Unchanged {}", line.content),
        }
    }
}
