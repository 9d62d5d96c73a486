use foodcheck_core::domain::food_analysis::entities::FoodAnalysis;

const PAGE_HEAD: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Food Allergen Identifier</title>
  <style>
    body {
      font-family: sans-serif;
      background: #f6f8fb;
      display: flex;
      justify-content: center;
      align-items: center;
      min-height: 100vh;
    }
    form {
      background: white;
      padding: 20px;
      border-radius: 12px;
      box-shadow: 0 4px 10px rgba(0,0,0,0.1);
      width: 400px;
      text-align: center;
    }
    input[type=file], input[type=submit] {
      margin: 10px 0;
    }
    .result, .error, .fun-fact {
      margin-top: 20px;
      text-align: left;
      padding: 15px;
      border-radius: 8px;
    }
    .result { background: #f9f9f9; }
    .error { background: #fdecea; color: #8a1c1c; }
    .fun-fact { background: #eef6ff; font-style: italic; }
    .fun-fact:empty { display: none; }
  </style>
</head>
<body>
"#;

const PAGE_TAIL: &str = "</body>\n</html>\n";

/// Everything the upload page can show.
#[derive(Debug, Default)]
pub struct PageView<'a> {
    pub root_path: &'a str,
    pub analysis: Option<&'a FoodAnalysis>,
    pub error: Option<String>,
    pub fun_fact_enabled: bool,
}

pub fn render_page(view: &PageView<'_>) -> String {
    let action = if view.root_path.is_empty() {
        "/".to_string()
    } else {
        view.root_path.to_string()
    };

    let mut html = String::with_capacity(4096);
    html.push_str(PAGE_HEAD);
    html.push_str(&format!(
        "  <form action=\"{}\" method=\"post\" enctype=\"multipart/form-data\">\n",
        escape_html(&action)
    ));
    html.push_str("    <h2>Food Allergen Identifier</h2>\n");
    html.push_str("    <input type=\"file\" name=\"file\" accept=\"image/*\" required><br>\n");
    html.push_str("    <input type=\"submit\" value=\"Analyze Food\">\n");

    if let Some(analysis) = view.analysis {
        html.push_str("    <div class=\"result\">\n");
        html.push_str("      <h3>Ingredients:</h3>\n");
        html.push_str(&format!("      <p>{}</p>\n", escape_html(&analysis.ingredients)));
        html.push_str("      <h3>Possible Allergens:</h3>\n");
        html.push_str(&format!("      <p>{}</p>\n", escape_html(&analysis.allergens)));
        html.push_str("    </div>\n");
    }

    if let Some(error) = &view.error {
        html.push_str(&format!(
            "    <div class=\"error\">{}</div>\n",
            escape_html(error)
        ));
    }

    if view.fun_fact_enabled {
        html.push_str("    <div class=\"fun-fact\" id=\"fun-fact\"></div>\n");
    }
    html.push_str("  </form>\n");

    if view.fun_fact_enabled {
        html.push_str(&fun_fact_script(view.root_path));
    }

    html.push_str(PAGE_TAIL);
    html
}

fn fun_fact_script(root_path: &str) -> String {
    let url = serde_json::to_string(&format!("{}/api/fun-fact", root_path))
        .unwrap_or_else(|_| "\"/api/fun-fact\"".to_string())
        .replace('<', "\\u003c");

    format!(
        r#"  <script>
    fetch({url})
      .then((res) => (res.ok ? res.json() : null))
      .then((fact) => {{
        if (fact && fact.text) {{
          document.getElementById("fun-fact").textContent = fact.text;
        }}
      }})
      .catch(() => {{}});
  </script>
"#
    )
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_page_has_form_and_no_results() {
        let html = render_page(&PageView::default());

        assert!(html.contains("<form action=\"/\" method=\"post\" enctype=\"multipart/form-data\">"));
        assert!(html.contains("name=\"file\""));
        assert!(!html.contains("Possible Allergens"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn results_are_escaped() {
        let analysis = FoodAnalysis::new(
            "a.jpg".to_string(),
            "{bread, <script>alert(1)</script>}".to_string(),
            "{celiac & friends}".to_string(),
        );
        let html = render_page(&PageView {
            analysis: Some(&analysis),
            ..PageView::default()
        });

        assert!(html.contains("<h3>Ingredients:</h3>"));
        assert!(html.contains("{bread, &lt;script&gt;alert(1)&lt;/script&gt;}"));
        assert!(html.contains("{celiac &amp; friends}"));
    }

    #[test]
    fn root_path_prefixes_form_and_fun_fact_url() {
        let html = render_page(&PageView {
            root_path: "/foodcheck",
            fun_fact_enabled: true,
            ..PageView::default()
        });

        assert!(html.contains("action=\"/foodcheck\""));
        assert!(html.contains("fetch(\"/foodcheck/api/fun-fact\")"));
        assert!(html.contains("id=\"fun-fact\""));
    }

    #[test]
    fn error_block_is_rendered() {
        let html = render_page(&PageView {
            error: Some("Image too large".to_string()),
            ..PageView::default()
        });

        assert!(html.contains("<div class=\"error\">Image too large</div>"));
    }

    #[test]
    fn escape_handles_quotes() {
        assert_eq!(escape_html(r#"a"b'c"#), "a&quot;b&#x27;c");
    }
}
