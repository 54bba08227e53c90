//! Walk a mixed Japanese/ASCII line the way double-click selection would.

use wordstop_core::{classify, explain, word_region, Granularity, GroupsConfig, PlainText, TextSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let groups = GroupsConfig::default().build()?;
    let text = PlainText::new("abcひらがな、漢字カナ");

    println!("text: {}", text.slice(0, text.len()));
    println!();

    for point in 0..=text.len() {
        let attrs = classify(&text, &groups, point);
        if attrs.is_empty() {
            continue;
        }
        println!("{point:>3}  {}", explain(attrs.bits()));
    }

    println!();
    for point in [1, 5, 9] {
        let region = word_region(&text, &groups, point, Granularity::Words);
        println!(
            "word at {point}: [{}, {}) {:?}",
            region.start,
            region.end,
            text.slice(region.start, region.end)
        );
    }

    Ok(())
}
