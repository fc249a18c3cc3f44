//! Reusable fixture content.

use super::TestEnv;

pub const SIMPLE_SVG: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\"><path d=\"M0 0h16v16H0z\"/></svg>\n";

pub const XML_SVG: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg><text xml:space=\"preserve\">A</text></svg>\n";

/// Raw and optimized trees with a few icons and an illustration
pub fn standard_project(env: &TestEnv) {
    env.write("icons/16px/alert.svg", SIMPLE_SVG);
    env.write("icons/16px/zoom_in.svg", SIMPLE_SVG);
    env.write("icons/24px/alert.svg", SIMPLE_SVG);

    env.write("optimized/icons/16px/alert.svg", SIMPLE_SVG);
    env.write("optimized/icons/16px/zoom-in.svg", SIMPLE_SVG);
    env.write("optimized/illustrations/32px/warning.svg", XML_SVG);

    env.write("optimizedIllustrations/empty/state.svg", SIMPLE_SVG);
    env.write("optimizedImages/photos/team.png", "png-bytes");
}
