use anyhow::Error;

pub(crate) fn format(err: &Error) -> String {
    let mut out = format!("Error: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nHints:\n");
        for hint in hints {
            out.push_str("- ");
            out.push_str(&hint);
            out.push('\n');
        }
    }
    out
}

fn suggestions(err: &Error) -> Vec<String> {
    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    let haystack = chain.join(" | ").to_ascii_lowercase();
    let mut out: Vec<String> = Vec::new();

    if haystack.contains("no such file or directory") || haystack.contains("failed to read") {
        push_hint(&mut out, "Verify the input path exists and is readable.");
        push_hint(
            &mut out,
            "Inputs resolve against the working directory, not the config file location.",
        );
    }

    if haystack.contains("not valid json") {
        push_hint(
            &mut out,
            "Inputs must be raw SonarQube Web API responses saved as JSON.",
        );
    }

    if haystack.contains("must be a json object") {
        push_hint(
            &mut out,
            "Save the whole API response (`{\"projectStatus\": ...}`, `{\"component\": ...}`, `{\"issues\": [...]}`), not a nested array.",
        );
    }

    if haystack.contains("input configured") {
        push_hint(
            &mut out,
            "Pass --quality-gate and --measures, or set both under [inputs] in the --config file.",
        );
    }

    if haystack.contains("toml") && (haystack.contains("parse") || haystack.contains("invalid")) {
        push_hint(&mut out, "Check the config file syntax and section names.");
    }

    out
}

fn push_hint(out: &mut Vec<String>, hint: &str) {
    if !out.iter().any(|h| h == hint) {
        out.push(hint.to_string());
    }
}
