use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::Idea;

pub const MIN_IDEAS: usize = 1;
pub const MAX_IDEAS: usize = 3;

/// A contender's bounded set of ideas.
///
/// Ideas are unique and kept in the order they were added, so enumeration is
/// deterministic. Between `MIN_IDEAS` and `MAX_IDEAS` ideas are held at all
/// times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Idea>", into = "Vec<Idea>")]
pub struct Manifesto {
    ideas: Vec<Idea>,
}

impl Manifesto {
    /// Create a manifesto from the given ideas. Repeated ideas are kept once,
    /// but the size bound applies to the ideas as submitted.
    pub fn new(ideas: impl IntoIterator<Item = Idea>) -> Result<Self> {
        let submitted = ideas.into_iter().collect::<Vec<_>>();
        if submitted.len() < MIN_IDEAS || submitted.len() > MAX_IDEAS {
            return Err(Error::InvalidManifestoSize(submitted.len()));
        }

        let mut ideas = Vec::with_capacity(MAX_IDEAS);
        for idea in submitted {
            if !ideas.contains(&idea) {
                ideas.push(idea);
            }
        }
        Ok(Self { ideas })
    }

    /// Read-only view of the ideas, in insertion order.
    pub fn ideas(&self) -> &[Idea] {
        &self.ideas
    }

    pub fn contains(&self, idea: &Idea) -> bool {
        self.ideas.contains(idea)
    }

    pub fn len(&self) -> usize {
        self.ideas.len()
    }

    /// Add an idea. Returns whether the idea was new; an idea that is already
    /// present is absorbed without error.
    pub fn add(&mut self, idea: Idea) -> Result<bool> {
        if self.ideas.len() >= MAX_IDEAS {
            return Err(Error::ManifestoFull);
        }
        if self.contains(&idea) {
            return Ok(false);
        }
        self.ideas.push(idea);
        Ok(true)
    }

    /// Remove an idea. Returns whether the idea was present.
    pub fn remove(&mut self, idea: &Idea) -> Result<bool> {
        if self.ideas.len() <= MIN_IDEAS {
            return Err(Error::ManifestoEmpty);
        }
        let before = self.ideas.len();
        self.ideas.retain(|existing| existing != idea);
        Ok(self.ideas.len() != before)
    }
}

impl TryFrom<Vec<Idea>> for Manifesto {
    type Error = Error;

    fn try_from(ideas: Vec<Idea>) -> Result<Self> {
        Self::new(ideas)
    }
}

impl From<Manifesto> for Vec<Idea> {
    fn from(manifesto: Manifesto) -> Self {
        manifesto.ideas
    }
}


#[cfg(test)]
mod tests {
    use rocket::serde::json::serde_json;

    use super::*;

    #[test]
    fn can_create_manifesto_with_one_to_three_ideas() {
        let one = Manifesto::new([Idea::example1()]).unwrap();
        assert_eq!(&[Idea::example1()], one.ideas());

        let two = Manifesto::new([Idea::example1(), Idea::example2()]).unwrap();
        assert_eq!(2, two.len());

        let three =
            Manifesto::new([Idea::example1(), Idea::example2(), Idea::example3()]).unwrap();
        assert_eq!(
            &[Idea::example1(), Idea::example2(), Idea::example3()],
            three.ideas()
        );
    }

    #[test]
    fn cannot_create_manifesto_with_more_than_three_ideas() {
        let ideas = [
            Idea::example1(),
            Idea::example2(),
            Idea::example3(),
            Idea::example4(),
        ];
        assert_eq!(Err(Error::InvalidManifestoSize(4)), Manifesto::new(ideas));
    }

    #[test]
    fn cannot_create_manifesto_with_no_ideas() {
        assert_eq!(
            Err(Error::InvalidManifestoSize(0)),
            Manifesto::new(Vec::new())
        );
    }

    #[test]
    fn repeated_ideas_are_kept_once() {
        let manifesto = Manifesto::new([Idea::example1(), Idea::example1()]).unwrap();
        assert_eq!(&[Idea::example1()], manifesto.ideas());
    }

    #[test]
    fn can_add_an_idea_if_manifesto_contains_less_than_three_ideas() {
        let mut manifesto = Manifesto::example();
        assert_eq!(Ok(true), manifesto.add(Idea::example3()));
        assert_eq!(
            &[Idea::example1(), Idea::example2(), Idea::example3()],
            manifesto.ideas()
        );
    }

    #[test]
    fn adding_a_known_idea_is_absorbed() {
        let mut manifesto = Manifesto::example();
        assert_eq!(Ok(false), manifesto.add(Idea::example1()));
        assert_eq!(2, manifesto.len());
    }

    #[test]
    fn cannot_add_an_idea_if_manifesto_already_contains_three_ideas() {
        let mut manifesto =
            Manifesto::new([Idea::example1(), Idea::example2(), Idea::example3()]).unwrap();
        assert_eq!(Err(Error::ManifestoFull), manifesto.add(Idea::example4()));
        assert_eq!(3, manifesto.len());
    }

    #[test]
    fn can_remove_an_idea_from_the_manifesto() {
        let mut manifesto = Manifesto::example();
        assert_eq!(Ok(true), manifesto.remove(&Idea::example1()));
        assert_eq!(&[Idea::example2()], manifesto.ideas());
    }

    #[test]
    fn cannot_remove_all_ideas_from_the_manifesto() {
        let mut manifesto = Manifesto::new([Idea::example1()]).unwrap();
        assert_eq!(Err(Error::ManifestoEmpty), manifesto.remove(&Idea::example1()));
        assert_eq!(&[Idea::example1()], manifesto.ideas());
    }

    #[test]
    fn deserialization_enforces_size_bounds() {
        let manifesto: Manifesto = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        assert_eq!(&[Idea::new("a"), Idea::new("b")], manifesto.ideas());
        assert!(serde_json::from_str::<Manifesto>("[]").is_err());
        assert!(serde_json::from_str::<Manifesto>(r#"["a", "b", "c", "d"]"#).is_err());
    }
}
