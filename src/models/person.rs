use diesel::prelude::*;
use uuid::Uuid;

/// Person model for reading from database
#[derive(Debug, Queryable, Selectable, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::persons)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Person {
    pub id: Uuid,
    pub email: String,
    pub login: String,
    pub about_me: String,
    pub password_hash: String,
    pub image: Option<Vec<u8>>,
}

/// NewPerson model for inserting new records
///
/// `about_me` and `image` are left to their column defaults.
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::persons)]
pub struct NewPerson {
    pub id: Uuid,
    pub email: String,
    pub login: String,
    pub password_hash: String,
}

impl NewPerson {
    /// The row as it reads back right after insertion
    pub fn into_person(self) -> Person {
        Person {
            id: self.id,
            email: self.email,
            login: self.login,
            about_me: String::new(),
            password_hash: self.password_hash,
            image: None,
        }
    }
}
