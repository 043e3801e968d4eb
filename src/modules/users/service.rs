use anyhow::Context;
use edusync_core::{AppError, hash_password, verify_password};
use edusync_db::{Bson, Document, ObjectId, Store, StoreError};
use edusync_models::users::USERS_COLLECTION;
use edusync_models::{NewUser, RegisterRequest, User, UserRecord};
use tracing::instrument;

use crate::modules::resource::model::{UpdateStatus, not_found_message};

pub const USER_LABEL: &str = "User";
pub const DUPLICATE_EMAIL_MESSAGE: &str = "User with this email already exists.";

/// Field carrying the unique index on the users collection.
const EMAIL_FIELD: &str = "email";

pub fn parse_user_id(raw: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(raw).map_err(|_| AppError::malformed_id("Invalid user ID format."))
}

fn to_record(document: Document) -> Result<UserRecord, AppError> {
    bson::from_document(document)
        .context("Stored user document is malformed")
        .map_err(AppError::internal)
}

/// Maps a unique index violation to the duplicate email message.
fn email_conflict(err: StoreError, context: &'static str) -> AppError {
    match err {
        StoreError::Duplicate { .. } => AppError::conflict(DUPLICATE_EMAIL_MESSAGE),
        other => AppError::internal(anyhow::Error::new(other).context(context)),
    }
}

fn to_document(user: &NewUser) -> Result<Document, AppError> {
    bson::to_document(user)
        .context("Failed to serialize user")
        .map_err(AppError::internal)
}

pub struct UserService;

impl UserService {
    #[instrument(skip(store))]
    pub async fn get_users(store: &Store) -> Result<Vec<User>, AppError> {
        let documents = store
            .find_all(USERS_COLLECTION)
            .await
            .context("Failed to fetch users")
            .map_err(AppError::internal)?;

        documents
            .into_iter()
            .map(|document| to_record(document).map(User::from))
            .collect()
    }

    #[instrument(skip(store))]
    pub async fn get_user(store: &Store, id: ObjectId) -> Result<UserRecord, AppError> {
        let document = store
            .find_by_id(USERS_COLLECTION, id)
            .await
            .context("Failed to fetch user")
            .map_err(AppError::internal)?
            .ok_or_else(|| AppError::not_found(not_found_message(USER_LABEL)))?;

        to_record(document)
    }

    #[instrument(skip(store))]
    pub async fn find_by_email(store: &Store, email: &str) -> Result<Option<UserRecord>, AppError> {
        store
            .find_one_by(USERS_COLLECTION, EMAIL_FIELD, Bson::String(email.to_string()))
            .await
            .context("Failed to look up user by email")
            .map_err(AppError::internal)?
            .map(to_record)
            .transpose()
    }

    /// Inserts a new account with a freshly hashed password.
    ///
    /// The lookup answers the common case before paying for a hash; the store's
    /// unique insert settles concurrent registrations of the same email.
    #[instrument(skip(store, dto), fields(email = %dto.email))]
    pub async fn create_user(store: &Store, dto: RegisterRequest) -> Result<ObjectId, AppError> {
        if Self::find_by_email(store, &dto.email).await?.is_some() {
            return Err(AppError::conflict(DUPLICATE_EMAIL_MESSAGE));
        }

        let user = NewUser {
            username: dto.username,
            email: dto.email,
            password: hash_password(&dto.password)?,
        };

        store
            .insert_unique(USERS_COLLECTION, EMAIL_FIELD, to_document(&user)?)
            .await
            .map_err(|err| email_conflict(err, "Failed to insert user"))
    }

    /// Full replace of a user.
    ///
    /// The stored hash is kept when the submitted password still verifies
    /// against it, so resubmitting the same data reports no change.
    #[instrument(skip(store, dto), fields(email = %dto.email))]
    pub async fn update_user(
        store: &Store,
        id: ObjectId,
        dto: RegisterRequest,
    ) -> Result<UpdateStatus, AppError> {
        let existing = Self::get_user(store, id).await?;

        if let Some(owner) = Self::find_by_email(store, &dto.email).await? {
            if owner.id != id {
                return Err(AppError::conflict(DUPLICATE_EMAIL_MESSAGE));
            }
        }

        let password = if verify_password(&dto.password, &existing.password)? {
            existing.password
        } else {
            hash_password(&dto.password)?
        };

        let user = NewUser {
            username: dto.username,
            email: dto.email,
            password,
        };

        let outcome = store
            .replace_unique(USERS_COLLECTION, id, EMAIL_FIELD, to_document(&user)?)
            .await
            .map_err(|err| email_conflict(err, "Failed to update user"))?;

        if outcome.matched == 0 {
            return Err(AppError::not_found(not_found_message(USER_LABEL)));
        }

        Ok(if outcome.modified == 0 {
            UpdateStatus::Unchanged
        } else {
            UpdateStatus::Updated
        })
    }

    #[instrument(skip(store))]
    pub async fn delete_user(store: &Store, id: ObjectId) -> Result<(), AppError> {
        let deleted = store
            .delete_one(USERS_COLLECTION, id)
            .await
            .context("Failed to delete user")
            .map_err(AppError::internal)?;

        if deleted == 0 {
            return Err(AppError::not_found(not_found_message(USER_LABEL)));
        }

        Ok(())
    }
}
