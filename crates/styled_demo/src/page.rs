//! The demo page: one container per helper, all styled by a single sheet scoped
//! under the page's root class.

use bs_breakpoints::RegistryError;
use styled_utils::{
    BreakpointQueryResolver, Rule, StyleFragment, StyleProps, StyledProps, WithCss, align_left,
    align_right, all_link_pseudo, center_horizontal, css, margin_x, margin_y, padding_x,
    padding_y,
};

/// Class carried by the page's root element.
pub const ROOT_CLASS: &str = "app";

/// Functional props of the badge component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgeProps {
    pub class_name: String,
}

/// Style props of the badge component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgeStyle {
    pub color: String,
    pub show: bool,
}

impl StyleProps for BadgeStyle {
    fn to_fragment(&self) -> StyleFragment {
        let display = if self.show { "inline-block" } else { "none" };
        css!("color: " { &self.color } ";\ndisplay: " { display } ";\n")
    }
}

pub type Badge = WithCss<StyledProps<BadgeProps, BadgeStyle>>;

/// The child component only takes extra CSS.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChildProps;

pub type Child = WithCss<ChildProps>;

pub fn default_badge() -> Badge {
    StyledProps::new(
        BadgeProps {
            class_name: "test".to_owned(),
        },
        BadgeStyle {
            color: "red".to_owned(),
            show: true,
        },
    )
    .with_css(css!("color: blue;\n"))
}

pub fn default_child() -> Child {
    WithCss::new(ChildProps).css(css!("color: lightblue;\n"))
}

fn container_styles(color: &str) -> StyleFragment {
    css!("background-color: " { color } ";\nwidth: 500px;\nheight: 100px;\n")
}

fn fit_content() -> Rule {
    Rule::new(".content")
        .declare("width", "fit-content")
        .declare("height", "fit-content")
}

fn filled_content() -> Rule {
    Rule::new(".content")
        .declare("margin", "0")
        .declare("background-color", "white")
        .declare("width", "100%")
        .declare("height", "100%")
}

/// Build the page stylesheet.
///
/// # Errors
/// Returns the registry's error when it lacks the `xs`, `md` or `xl` tiers.
pub fn stylesheet(
    resolver: BreakpointQueryResolver<'_>,
    child: &Child,
    badge: &Badge,
) -> Result<StyleFragment, RegistryError> {
    let query = Rule::new(".query-container")
        .with(resolver.resolve_min("md", css!("background-color: blue;"))?)
        .with(resolver.resolve_max("xl", css!("color: purple;"))?)
        .with(resolver.resolve_same("xs", css!("color: red;"))?);

    let root = Rule::new(format!(".{ROOT_CLASS}"))
        .nest(
            Rule::new(".ch-container")
                .with(container_styles("red"))
                .nest(fit_content().with(center_horizontal())),
        )
        .nest(
            Rule::new(".al-container")
                .with(container_styles("blue"))
                .nest(fit_content().with(align_left())),
        )
        .nest(
            Rule::new(".ar-container")
                .with(container_styles("green"))
                .nest(fit_content().with(align_right())),
        )
        .nest(
            Rule::new(".px-container")
                .with(container_styles("yellow"))
                .with(padding_x("10px"))
                .nest(filled_content()),
        )
        .nest(
            Rule::new(".py-container")
                .with(container_styles("purple"))
                .with(padding_y("10px"))
                .nest(filled_content()),
        )
        .nest(
            Rule::new(".mx-container")
                .with(container_styles("orange"))
                .declare("display", "flex")
                .declare("flex-direction", "row")
                .nest(
                    Rule::new(".placeholder")
                        .declare("background-color", "black")
                        .declare("width", "10px"),
                )
                .nest(
                    Rule::new(".content")
                        .declare("margin", "0")
                        .declare("background-color", "white")
                        .declare("width", "fit-content")
                        .declare("height", "100%")
                        .with(margin_x("10px")),
                ),
        )
        .nest(
            Rule::new(".my-container")
                .with(container_styles("pink"))
                .with(margin_y("10px")),
        )
        .nest(query)
        .nest(Rule::new(".all-link-pseudo").with(all_link_pseudo(css!("color: red;"))))
        .nest(Rule::new(".child").with(child.css_fragment()))
        .nest(Rule::new(format!(".{}", badge.props.functional.class_name)).with(badge.fragment()));

    Ok(root.to_fragment())
}

fn markup(badge: &Badge) -> String {
    format!(
        r##"<div class="{ROOT_CLASS}">
<h1>App</h1>
<div class="ch-container"><p class="content">Centered horizontally</p></div>
<div class="al-container"><p class="content">Aligned left</p></div>
<div class="ar-container"><p class="content">Aligned right</p></div>
<div class="px-container"><p class="content">Padding X 10px</p></div>
<div class="py-container"><p class="content">Padding Y 10px</p></div>
<div class="mx-container">
<div class="placeholder"></div>
<p class="content">Margin X 10px</p>
<div class="placeholder"></div>
</div>
<div class="my-container">Margin Y 10px</div>
<div class="query-container">Different colors based on screen width</div>
<a class="all-link-pseudo" href="#">Red on all pseudo classes</a>
<div class="child">Child</div>
<span class="{}">Badge</span>
</div>"##,
        badge.props.functional.class_name
    )
}

/// Render the complete HTML document.
///
/// # Errors
/// Returns the registry's error when the stylesheet cannot be built.
pub fn render_page(resolver: BreakpointQueryResolver<'_>) -> Result<String, RegistryError> {
    let child = default_child();
    let badge = default_badge();
    let sheet = stylesheet(resolver, &child, &badge)?;
    Ok(format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>styled_utils demo</title>\n<style>\n{sheet}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        markup(&badge)
    ))
}
