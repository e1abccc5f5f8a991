use crate::documents::user_document::{GITLAB_USERNAME_FIELD, UserDocument, to_bson_datetime};
use crate::{
    DUPLICATE_KEY_CODE, InsertOutcome, MongoConnection, Result as DbErrorResult, UserStore,
};

use tracker_core::{ProfileUpdate, User, UserRole};

use async_trait::async_trait;
use log::debug;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::options::{IndexOptions, ReturnDocument};
use mongodb::{Collection, IndexModel};

pub struct MongoUserRepository {
    users: Collection<UserDocument>,
}

impl MongoUserRepository {
    pub fn new(connection: &MongoConnection) -> Self {
        Self {
            users: connection.users(),
        }
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn ensure_indexes(&self) -> DbErrorResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { GITLAB_USERNAME_FIELD: 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        let created = self.users.create_index(index).await?;
        debug!("Ensured index {}", created.index_name);

        Ok(())
    }

    async fn find_by_gitlab_username(
        &self,
        gitlab_username: &str,
    ) -> DbErrorResult<Option<User>> {
        self.users
            .find_one(doc! { GITLAB_USERNAME_FIELD: gitlab_username })
            .await?
            .map(User::try_from)
            .transpose()
    }

    async fn find_by_gitlab_username_and_role(
        &self,
        gitlab_username: &str,
        role: UserRole,
    ) -> DbErrorResult<Option<User>> {
        self.users
            .find_one(doc! { GITLAB_USERNAME_FIELD: gitlab_username, "role": role.as_str() })
            .await?
            .map(User::try_from)
            .transpose()
    }

    async fn count_by_role(&self, role: UserRole) -> DbErrorResult<u64> {
        let count = self
            .users
            .count_documents(doc! { "role": role.as_str() })
            .await?;
        Ok(count)
    }

    async fn insert_if_absent(&self, user: &User) -> DbErrorResult<InsertOutcome> {
        let id = ObjectId::new();
        let document = UserDocument::from_user(user, id);

        // Upsert with $setOnInsert: an existing record is returned untouched,
        // a missing one is created from the filter plus these fields.
        let result = self
            .users
            .find_one_and_update(
                doc! { GITLAB_USERNAME_FIELD: user.gitlab_username.as_str() },
                doc! { "$setOnInsert": document.to_insert_fields()? },
            )
            .upsert(true)
            .return_document(ReturnDocument::Before)
            .await;

        match result {
            Ok(None) => Ok(InsertOutcome::Inserted { id: id.to_hex() }),
            Ok(Some(existing)) => {
                debug!(
                    "User {} already present as {}",
                    existing.gitlab_username, existing.id
                );
                Ok(InsertOutcome::AlreadyExists)
            }
            // Either a concurrent upsert of the same username won the race, or
            // another unique index (such as the application's `gitlabId`) was hit.
            Err(e) if is_duplicate_key(&e) => {
                match self.find_by_gitlab_username(&user.gitlab_username).await? {
                    Some(_) => Ok(InsertOutcome::AlreadyExists),
                    None => Err(e.into()),
                }
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn update_profile(
        &self,
        gitlab_username: &str,
        role: UserRole,
        update: &ProfileUpdate,
    ) -> DbErrorResult<Option<User>> {
        let mut set = doc! { "updatedAt": to_bson_datetime(update.updated_at) };
        if let Some(ref name) = update.name {
            set.insert("name", name.as_str());
        }
        if let Some(ref email) = update.email {
            set.insert("email", email.as_str());
        }

        self.users
            .find_one_and_update(
                doc! { GITLAB_USERNAME_FIELD: gitlab_username, "role": role.as_str() },
                doc! { "$set": set },
            )
            .return_document(ReturnDocument::After)
            .await?
            .map(User::try_from)
            .transpose()
    }
}

fn is_duplicate_key(error: &MongoError) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        _ => false,
    }
}
