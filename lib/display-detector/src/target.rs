//! What the binding functions accept: elements or a CSS selector.

use crate::environment::Environment;



// ==============
// === Target ===
// ==============

/// Elements to bind or unbind. Selectors are resolved when the operation runs, so elements added
/// to the document later are not affected.
#[derive(Clone,Debug,PartialEq)]
pub enum Target<Element> {
    /// A single element.
    Element(Element),
    /// A list of elements.
    Elements(Vec<Element>),
    /// All elements matching a CSS selector.
    Selector(String),
}

impl<Element> Target<Element> {
    /// Constructor of the `Element` variant.
    pub fn element(element:Element) -> Self {
        Target::Element(element)
    }

    /// Resolves the target to the list of elements it denotes.
    pub fn resolve<Env>(self, env:&Env) -> Vec<Element>
    where Env:Environment<Element=Element> {
        match self {
            Target::Element(element)   => vec![element],
            Target::Elements(elements) => elements,
            Target::Selector(selector) => env.query_all(&selector),
        }
    }
}

impl<Element> From<&str> for Target<Element> {
    fn from(selector:&str) -> Self {
        Target::Selector(selector.into())
    }
}

impl<Element> From<String> for Target<Element> {
    fn from(selector:String) -> Self {
        Target::Selector(selector)
    }
}

impl<Element> From<&String> for Target<Element> {
    fn from(selector:&String) -> Self {
        Target::Selector(selector.clone())
    }
}

impl<Element> From<Vec<Element>> for Target<Element> {
    fn from(elements:Vec<Element>) -> Self {
        Target::Elements(elements)
    }
}



// =============
// === Tests ===
// =============

#[cfg(test)]
mod tests {
    use super::*;

    use crate::environment::mock::ElementId;
    use crate::environment::mock::MockEnvironment;
    use crate::geometry::Rectangle;

    #[test]
    fn selectors_resolve_at_call_time() {
        let env    = MockEnvironment::new(800.0,600.0);
        let first  = env.add(None,Rectangle::new(0.0,0.0,10.0,10.0));
        let target = Target::<ElementId>::from(".box");
        assert!(target.clone().resolve(&env).is_empty());
        env.add_class(first,"box");
        let second = env.add(None,Rectangle::new(0.0,0.0,10.0,10.0));
        env.add_class(second,"box");
        assert_eq!(target.resolve(&env),vec![first,second]);
    }

    #[test]
    fn elements_resolve_to_themselves() {
        let env = MockEnvironment::new(800.0,600.0);
        assert_eq!(Target::element(ElementId(3)).resolve(&env),vec![ElementId(3)]);
        let list = vec![ElementId(1),ElementId(2)];
        assert_eq!(Target::from(list.clone()).resolve(&env),list);
        assert!(Target::<ElementId>::from("#not-a-class").resolve(&env).is_empty());
    }
}
