//! Pretty output formatting.

use collabctx_core::context::{Collab, Context};

/// Format a context for display.
pub fn format_context(context: &Context) -> String {
    let mut output = format!("Context {}", context.context);
    if let Some(name) = &context.name {
        output.push_str(&format!("\n  Name: {}", name));
    }
    if let Some(app_id) = context.app_id {
        output.push_str(&format!("\n  App: {}", app_id));
    }
    output.push_str(&format!("\n{}", format_collab(&context.collab)));
    output
}

/// Format a collab for display.
pub fn format_collab(collab: &Collab) -> String {
    let visibility = if collab.public { "public" } else { "private" };
    let mut output = format!("{} [{}]\n  ID: {}", collab.title, visibility, collab.id);
    if let Some(content) = &collab.content {
        output.push_str(&format!("\n  Content: {}", content));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_collab_private() {
        let collab = Collab {
            id: 7,
            title: "Demo".to_string(),
            content: None,
            public: false,
        };
        assert_eq!(format_collab(&collab), "Demo [private]\n  ID: 7");
    }

    #[test]
    fn test_format_context_includes_collab() {
        let context = Context {
            context: "11111111-1111-1111-1111-111111111111".parse().unwrap(),
            name: Some("My App".to_string()),
            app_id: None,
            collab: Collab {
                id: 7,
                title: "Demo".to_string(),
                content: None,
                public: true,
            },
        };
        let output = format_context(&context);
        assert!(output.starts_with("Context 11111111-1111-1111-1111-111111111111"));
        assert!(output.contains("Name: My App"));
        assert!(output.contains("Demo [public]"));
    }
}
