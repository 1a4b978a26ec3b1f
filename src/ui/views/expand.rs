//! Text rendering for `genshard expand`

pub fn render_expansion(input: &str, output: &str) -> String {
    format!("{} -> {}\n", input, output)
}

pub fn render_collision_free(count: usize) -> String {
    match count {
        1 => "1 output, no collisions\n".to_string(),
        n => format!("{} outputs, no collisions\n", n),
    }
}
