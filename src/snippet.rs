//! Static "code editor" card in the hero section.

pub const EDITOR_TITLE: &str = "Developer.java";

/// One styled run of text in the snippet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodeToken {
    pub text: &'static str,
    /// CSS class, empty for plain text.
    pub class: &'static str,
    pub id: Option<&'static str>,
}

const fn tok(text: &'static str, class: &'static str) -> CodeToken {
    CodeToken {
        text,
        class,
        id: None,
    }
}

pub const DEVELOPER_SNIPPET: &[CodeToken] = &[
    tok("public class ", "code-keyword"),
    tok("Developer ", "code-class"),
    tok("{\n", ""),
    tok("    String ", "code-class"),
    tok("name ", ""),
    tok("= ", "code-keyword"),
    tok("\"Dandu Suresh\";\n", "code-string"),
    tok("    String ", "code-class"),
    tok("role ", ""),
    tok("= ", "code-keyword"),
    tok("\"", "code-string"),
    CodeToken {
        text: "Java Developer",
        class: "code-string",
        id: Some("dynamic-role"),
    },
    tok("\";\n", "code-string"),
    tok("    String[] ", "code-class"),
    tok("skills ", ""),
    tok("= ", "code-keyword"),
    tok("{\n", ""),
    tok("        \"Java\", \"Spring Boot\",\n", "code-string"),
    tok("        \"MySQL\", \"JavaScript\"\n", "code-string"),
    tok("    };\n", ""),
    tok("}", ""),
];

/// Plain-text rendition of a token list.
pub fn plain_text(tokens: &[CodeToken]) -> String {
    tokens.iter().map(|t| t.text).collect()
}

#[cfg(target_arch = "wasm32")]
pub fn render(document: &web_sys::Document, target: &web_sys::Element, tokens: &[CodeToken]) -> anyhow::Result<()> {
    target.set_inner_html("");
    for t in tokens {
        let span = document
            .create_element("span")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        if !t.class.is_empty() {
            span.set_class_name(t.class);
        }
        if let Some(id) = t.id {
            span.set_id(id);
        }
        span.set_text_content(Some(t.text));
        target
            .append_child(&span)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    Ok(())
}
