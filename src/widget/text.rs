// src/widget/text.rs
//
// Plain-text presenter for terminals and logs. One line per vertical child;
// a horizontal stack's texts share a line.

use super::tree::{Axis, Node, Spacer, Stack, Widget};

/// Glyph standing in for the header symbol.
const SYMBOL_GLYPH: &str = "⛱";

pub fn render_text(widget: &Widget) -> String {
    let mut lines = Vec::new();
    push_stack(&widget.root, &mut lines);
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn push_stack(stack: &Stack, lines: &mut Vec<String>) {
    match stack.axis {
        Axis::Vertical => {
            for child in &stack.children {
                match child {
                    Node::Stack(s) => push_stack(s, lines),
                    Node::Text(t) => lines.push(t.content.clone()),
                    Node::Image(_) => lines.push(s!(SYMBOL_GLYPH)),
                    // Vertical gaps carry no text.
                    Node::Spacer(_) => {}
                }
            }
        }
        Axis::Horizontal => {
            let line = inline(stack);
            if !line.is_empty() {
                lines.push(line);
            }
        }
    }
}

/// Flatten a horizontal stack: fixed spacers become one space, flexible ones vanish.
fn inline(stack: &Stack) -> String {
    let mut line = s!();
    for child in &stack.children {
        match child {
            Node::Text(t) => line.push_str(&t.content),
            Node::Image(_) => line.push_str(SYMBOL_GLYPH),
            Node::Spacer(Spacer::Fixed(_)) => line.push(' '),
            Node::Spacer(Spacer::Flexible) => {}
            Node::Stack(s) => line.push_str(&inline(s)),
        }
    }
    line.trim_end().to_string()
}
