//! Code Emitter
//!
//! Pure text generation for the enum manifest and the React component
//! package. Asset bodies are passed through verbatim apart from the JSX
//! attribute rewrite.

use std::path::Path;

use crate::domain::entities::{GeneratedArtifact, IconManifest};
use crate::domain::value_objects::ComponentName;

/// Component index (source)
pub const INDEX_SOURCE: &str = "index.tsx";
/// Component index (type declarations)
pub const INDEX_TYPES: &str = "index.d.ts";

/// Enum source artifact
pub fn enum_artifact(manifest: &IconManifest, output: &Path) -> GeneratedArtifact {
    GeneratedArtifact::new(output, manifest.render())
}

/// Component module wrapping the SVG markup
pub fn component_source(name: &ComponentName, svg: &str) -> String {
    let body = jsx_attributes(svg.trim());
    format!(
        "import {{ createSvgIcon }} from \"@mui/material/utils\";\n\
         const {name} = createSvgIcon(\n  {body}\n, '{name}');\n\
         export default {name};\n"
    )
}

/// Type declaration paired with a component module
pub fn type_declaration(name: &ComponentName) -> String {
    format!(
        "import {{ SvgIconProps }} from \"@mui/material\";\n\
         declare const {name}: SvgIconProps;\n\
         export default {name};\n"
    )
}

/// `export { default as X } from './X';`
pub fn export_line(name: &ComponentName) -> String {
    format!("export {{ default as {name} }} from './{name}';")
}

/// Index fragment for one directory's components, newline terminated
pub fn export_fragment<'a>(names: impl IntoIterator<Item = &'a ComponentName>) -> String {
    let mut out = String::new();
    for name in names {
        out.push_str(&export_line(name));
        out.push('\n');
    }
    out
}

/// Rewrite SVG attributes that are not valid JSX
pub fn jsx_attributes(source: &str) -> String {
    source.replace("xml:space", "xmlSpace")
}

/// Component module and type declaration for one asset
pub fn component_artifacts(
    name: &ComponentName,
    svg: &str,
    out_dir: &Path,
) -> [GeneratedArtifact; 2] {
    [
        GeneratedArtifact::new(
            out_dir.join(format!("{name}.tsx")),
            component_source(name, svg),
        ),
        GeneratedArtifact::new(out_dir.join(format!("{name}.d.ts")), type_declaration(name)),
    ]
}

/// Append-mode index artifacts (source and declarations) for one directory
pub fn index_artifacts(fragment: &str, out_dir: &Path) -> [GeneratedArtifact; 2] {
    [
        GeneratedArtifact::append(out_dir.join(INDEX_SOURCE), fragment),
        GeneratedArtifact::append(out_dir.join(INDEX_TYPES), fragment),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::WriteMode;

    fn name() -> ComponentName {
        ComponentName::derive(Path::new("illustrations/32px/warning.svg")).unwrap()
    }

    #[test]
    fn component_source_wraps_svg() {
        let source = component_source(&name(), "<svg><path d=\"M0 0\"/></svg>\n");
        insta::assert_snapshot!(source, @r#"
        import { createSvgIcon } from "@mui/material/utils";
        const WarningIllustrations32Icon = createSvgIcon(
          <svg><path d="M0 0"/></svg>
        , 'WarningIllustrations32Icon');
        export default WarningIllustrations32Icon;
        "#);
    }

    #[test]
    fn component_source_rewrites_xml_space() {
        let source = component_source(&name(), "<svg><text xml:space=\"preserve\">a</text></svg>");
        assert!(source.contains("xmlSpace=\"preserve\""));
        assert!(!source.contains("xml:space"));
    }

    #[test]
    fn type_declaration_format() {
        assert_eq!(
            type_declaration(&name()),
            "import { SvgIconProps } from \"@mui/material\";\n\
             declare const WarningIllustrations32Icon: SvgIconProps;\n\
             export default WarningIllustrations32Icon;\n"
        );
    }

    #[test]
    fn export_fragment_one_line_per_component() {
        let a = ComponentName::derive(Path::new("16px/alert.svg")).unwrap();
        let b = ComponentName::derive(Path::new("16px/zoom.svg")).unwrap();

        assert_eq!(
            export_fragment([&a, &b]),
            "export { default as Alert16Icon } from './Alert16Icon';\n\
             export { default as Zoom16Icon } from './Zoom16Icon';\n"
        );
    }

    #[test]
    fn component_artifacts_are_paired() {
        let [source, types] = component_artifacts(&name(), "<svg/>", Path::new("out"));
        assert_eq!(source.path(), Path::new("out/WarningIllustrations32Icon.tsx"));
        assert_eq!(types.path(), Path::new("out/WarningIllustrations32Icon.d.ts"));
        assert_eq!(source.mode(), WriteMode::Overwrite);
    }

    #[test]
    fn index_artifacts_append() {
        let [source, types] = index_artifacts("x\n", Path::new("out"));
        assert_eq!(source.path(), Path::new("out/index.tsx"));
        assert_eq!(types.path(), Path::new("out/index.d.ts"));
        assert_eq!(source.mode(), WriteMode::Append);
        assert_eq!(types.mode(), WriteMode::Append);
    }
}
