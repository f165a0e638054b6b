use serde::Serialize;

/// Page data handed to the renderer: the page component to draw and its props.
#[derive(Debug, Serialize)]
pub struct View<P> {
    pub component: &'static str,
    pub props: P,
}

impl<P: Serialize> View<P> {
    pub fn new(component: &'static str, props: P) -> Self {
        Self { component, props }
    }
}
