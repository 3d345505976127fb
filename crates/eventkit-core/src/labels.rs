/// Project/context/entity/event/version coordinates of an event.
///
/// Every label is a plain concatenation with literal separators (`.`, `->`,
/// `@`, `/`, `_`). Nothing is cached; labels follow the fields they borrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Coordinates<'a> {
    /// Project code.
    pub project: &'a str,
    /// Context code.
    pub context: &'a str,
    /// Entity code.
    pub entity: &'a str,
    /// Event code.
    pub event: &'a str,
    /// Version label.
    pub version: &'a str,
}

impl Coordinates<'_> {
    /// `project.context.entity->event`
    pub fn full_name(&self) -> String {
        format!("{}->{}", self.entity_name(), self.event)
    }

    /// `project.context.entity->event@version`
    pub fn unique_name(&self) -> String {
        format!("{}@{}", self.full_name(), self.version)
    }

    /// `/project/context/entity`
    pub fn entity_url(&self) -> String {
        format!("/{}/{}/{}", self.project, self.context, self.entity)
    }

    /// `project.context.entity`
    pub fn entity_name(&self) -> String {
        format!("{}.{}.{}", self.project, self.context, self.entity)
    }

    /// `project.context.entity@version`
    pub fn versioned_entity_name(&self) -> String {
        format!("{}@{}", self.entity_name(), self.version)
    }

    /// `context_entity`
    pub fn table_name(&self) -> String {
        table_name(self.context, self.entity)
    }
}

/// Storage table for an entity within a context.
pub fn table_name(context: &str, entity: &str) -> String {
    format!("{}_{}", context, entity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn avatar() -> Coordinates<'static> {
        Coordinates {
            project: "sys",
            context: "user",
            entity: "avatar",
            event: "update",
            version: "0.1.0",
        }
    }

    #[test]
    fn labels_use_literal_separators() {
        let c = avatar();
        assert_eq!(c.full_name(), "sys.user.avatar->update");
        assert_eq!(c.unique_name(), "sys.user.avatar->update@0.1.0");
        assert_eq!(c.entity_url(), "/sys/user/avatar");
        assert_eq!(c.entity_name(), "sys.user.avatar");
        assert_eq!(c.versioned_entity_name(), "sys.user.avatar@0.1.0");
        assert_eq!(c.table_name(), "user_avatar");
    }

    #[test]
    fn empty_coordinates_keep_separators() {
        let c = Coordinates::default();
        assert_eq!(c.full_name(), "..->");
        assert_eq!(c.entity_url(), "///");
        assert_eq!(c.table_name(), "_");
    }
}
