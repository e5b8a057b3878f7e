//! Entity trait implementation for the Car domain type.

use crate::framework::Entity;
use crate::model::Car;

// No `validate` override: no constraints are enforced on car attributes.
impl Entity for Car {
    const KIND: &'static str = "Car";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn assign_id(&mut self, id: String) {
        self.id = Some(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::EntityService;

    #[test]
    fn no_constraints_enforced_on_car_attributes() {
        let mut service = EntityService::<Car>::new();
        let odd = Car::new("", "   ", -7);

        let created = service.create(odd).unwrap();
        assert!(!created.needs_id());
        assert_eq!(created.quantity, -7);

        let mut edited = created.clone();
        edited.quantity = -100;
        assert_eq!(service.update(edited.clone()), Ok(Some(edited)));
    }

    #[test]
    fn missing_car_is_still_rejected() {
        let mut service = EntityService::<Car>::new();
        let err = service.create(None::<Car>).unwrap_err();
        assert_eq!(err.messages().collect::<Vec<_>>(), vec!["Car must not be null"]);
    }
}
