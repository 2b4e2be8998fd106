// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_todo_list(sections: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("Section {}\n", section));
        content.push_str("---\n");
        // Deliberately out of priority order so the sort has work to do
        for i in 0..8 {
            let symbol = ['+', '-', '?', '<', '*', '»', '>', '•'][i % 8];
            content.push_str(&format!("{} task {} in section {}\n", symbol, i, section));
        }
        content.push('\n');

        if section % 4 == 0 {
            content.push_str("```\n+ fenced lines are left alone\n- in any order\n```\n\n");
        }
    }

    content
}

#[allow(dead_code)]
pub fn generate_notes(paragraphs: usize) -> String {
    let base = "Meeting notes with a paragraph of free text.\nA second line of prose.\n\n\n- follow up\n+ sent the email\n< drafting reply\n\n";
    base.repeat(paragraphs)
}
