use log::warn;

/// Valid dog ages in years
pub const AGE_RANGE: std::ops::RangeInclusive<u32> = 1..=29;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DogError {
    InvalidAge(u32),
}

impl std::fmt::Display for DogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DogError::InvalidAge(age) => write!(f, "Invalid age: {}", age),
        }
    }
}

impl std::error::Error for DogError {}

#[derive(Debug, Clone)]
pub struct Dog {
    name: String,
    age: u32,
}

impl Dog {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self { name: name.into(), age }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn set_age(&mut self, age: u32) -> Result<(), DogError> {
        if !AGE_RANGE.contains(&age) {
            warn!("{}: rejected age {}", self.name, age);
            return Err(DogError::InvalidAge(age));
        }
        self.age = age;
        Ok(())
    }

    pub fn bark(&self) -> String {
        format!("{} says: Woof!", self.name)
    }
}

impl std::fmt::Display for Dog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Name: {}, Age: {}", self.name, self.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bark() {
        assert_eq!(Dog::new("Buddy", 3).bark(), "Buddy says: Woof!");
    }

    #[test]
    fn test_set_age() {
        let mut dog = Dog::new("Buddy", 3);
        assert_eq!(dog.set_age(4), Ok(()));
        assert_eq!(dog.age(), 4);

        assert_eq!(dog.set_age(0), Err(DogError::InvalidAge(0)));
        assert_eq!(dog.set_age(30), Err(DogError::InvalidAge(30)));
        assert_eq!(dog.age(), 4);
    }

    #[test]
    fn test_display() {
        assert_eq!(Dog::new("Lucy", 1).to_string(), "Name: Lucy, Age: 1");
    }
}
