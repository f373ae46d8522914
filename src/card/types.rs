use serde::Deserialize;

/// A parsed card document: a tree of typed elements plus card-level actions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub body: Vec<Element>,
    #[serde(default)]
    pub actions: Vec<Element>,
}

/// Stable type tag used to look up a render routine for an element.
///
/// `CardElement`, `Input`, and `Action` are abstract ancestor kinds: no
/// element carries them directly, but a routine registered under one of them
/// handles every descendant kind that has no more specific registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    TextBlock,
    Image,
    Container,
    ColumnSet,
    Column,
    FactSet,
    InputText,
    InputToggle,
    ActionOpenUrl,
    ActionSubmit,
    CardElement,
    Input,
    Action,
}

impl ElementKind {
    /// The next kind to consult when no routine is registered for this one.
    pub fn ancestor(self) -> Option<ElementKind> {
        match self {
            ElementKind::InputText | ElementKind::InputToggle => Some(ElementKind::Input),
            ElementKind::ActionOpenUrl | ElementKind::ActionSubmit => Some(ElementKind::Action),
            ElementKind::TextBlock
            | ElementKind::Image
            | ElementKind::Container
            | ElementKind::ColumnSet
            | ElementKind::Column
            | ElementKind::FactSet
            | ElementKind::Input => Some(ElementKind::CardElement),
            ElementKind::Action | ElementKind::CardElement => None,
        }
    }
}

/// One node of the card body. Unrecognized `type` values deserialize to
/// `Unknown` and are skipped by dispatch instead of failing the parse.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Element {
    TextBlock(TextBlock),
    Image(Image),
    Container(Container),
    ColumnSet(ColumnSet),
    Column(Column),
    FactSet(FactSet),
    #[serde(rename = "Input.Text")]
    InputText(TextInput),
    #[serde(rename = "Input.Toggle")]
    InputToggle(ToggleInput),
    #[serde(rename = "Action.OpenUrl")]
    ActionOpenUrl(OpenUrlAction),
    #[serde(rename = "Action.Submit")]
    ActionSubmit(SubmitAction),
    #[serde(other)]
    Unknown,
}

impl Element {
    /// Runtime kind used for dispatch; `None` for unknown element types.
    pub fn kind(&self) -> Option<ElementKind> {
        match self {
            Element::TextBlock(_) => Some(ElementKind::TextBlock),
            Element::Image(_) => Some(ElementKind::Image),
            Element::Container(_) => Some(ElementKind::Container),
            Element::ColumnSet(_) => Some(ElementKind::ColumnSet),
            Element::Column(_) => Some(ElementKind::Column),
            Element::FactSet(_) => Some(ElementKind::FactSet),
            Element::InputText(_) => Some(ElementKind::InputText),
            Element::InputToggle(_) => Some(ElementKind::InputToggle),
            Element::ActionOpenUrl(_) => Some(ElementKind::ActionOpenUrl),
            Element::ActionSubmit(_) => Some(ElementKind::ActionSubmit),
            Element::Unknown => None,
        }
    }
}

/// Named foreground color understood by the host palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorToken {
    #[default]
    Default,
    Accent,
    Good,
    Warning,
    Attention,
    Dark,
    Light,
}

/// Container background/foreground style selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContainerStyle {
    #[default]
    Default,
    Emphasis,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub color: Option<ColorToken>,
    #[serde(default)]
    pub is_subtle: Option<bool>,
    #[serde(default)]
    pub wrap: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    #[serde(default)]
    pub items: Vec<Element>,
    #[serde(default)]
    pub style: Option<ContainerStyle>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSet {
    #[serde(default)]
    pub columns: Vec<Element>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    #[serde(default)]
    pub items: Vec<Element>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactSet {
    #[serde(default)]
    pub facts: Vec<Fact>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fact {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextInput {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleInput {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenUrlAction {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAction {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}
