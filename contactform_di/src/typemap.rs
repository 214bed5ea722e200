use std::{
    any::{Any, TypeId},
    collections::HashMap,
};

/// A map holding at most one value per type.
#[derive(Debug, Default)]
pub struct TypeMap(HashMap<TypeId, Box<dyn Any>>);

impl TypeMap {
    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.0
            .get(&TypeId::of::<T>())
            .and_then(|x| x.downcast_ref())
    }

    pub fn insert<T: 'static>(&mut self, x: T) {
        self.0.insert(TypeId::of::<T>(), Box::new(x));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_insert() {
        let mut map = TypeMap::default();
        assert_eq!(map.get::<u32>(), None);

        map.insert(7u32);
        map.insert("foo");
        map.insert(8u32);

        assert_eq!(map.get::<u32>(), Some(&8));
        assert_eq!(map.get::<&str>(), Some(&"foo"));
        assert_eq!(map.get::<i32>(), None);
    }
}
