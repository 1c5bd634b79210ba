use crate::utils::escape_html;

/// Render the result page for an address and its reversed form.
///
/// Both values are escaped; the surrounding markup is fixed.
#[must_use]
pub fn render_page(original: &str, reversed: &str) -> String {
    let original = escape_html(original);
    let reversed = escape_html(reversed);

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>IP Reverser</title>
    <style>
        body {{
            font-family: Arial, sans-serif;
            margin: 40px;
            text-align: center;
        }}
        .ip-container {{
            margin: 20px;
            padding: 20px;
            border: 1px solid #ddd;
            border-radius: 5px;
            background-color: #f9f9f9;
        }}
        .original {{
            color: #555;
        }}
        .reversed {{
            color: #0066cc;
            font-size: 1.5em;
            font-weight: bold;
        }}
    </style>
</head>
<body>
    <h1>IP Reverser</h1>
    <div class="ip-container">
        <p class="original">Your original IP: {original}</p>
        <p class="reversed">Your IP reversed: {reversed}</p>
    </div>
</body>
</html>
"#
    )
}
