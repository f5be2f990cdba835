use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

use crate::config::DatabaseSettings;
use crate::core::{is_mutual_like, normalize_pair};
use crate::models::{
    Block, CreateProfileRequest, Interest, Match, MatchWithProfiles, Message, MessageKind,
    Profile, Report, Swipe, SwipeAction, UpdateProfileRequest,
};

/// Errors that can occur when interacting with the store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("already exists: {0}")]
    Duplicate(String),
}

/// PostgreSQL store client
///
/// Owns the connection pool and every query the service issues. Handlers
/// receive this through the shared application state; there are no global
/// store handles.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new store client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout_secs: u64,
        idle_timeout_secs: u64,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(idle_timeout_secs))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new store client from settings
    pub async fn from_settings(settings: &DatabaseSettings) -> Result<Self, StoreError> {
        Self::new(
            &settings.url,
            settings.max_connections.unwrap_or(10),
            settings.min_connections.unwrap_or(1),
            settings.acquire_timeout_secs.unwrap_or(5),
            settings.idle_timeout_secs.unwrap_or(600),
        )
        .await
    }

    // --- Profiles ---

    /// Fetch the profile belonging to an authenticated subject
    pub async fn get_profile_by_subject(&self, user_id: &str) -> Result<Profile, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, display_name, age, location, bio, photo_urls, interests,
                   is_verified, is_premium, is_active, profile_type, created_at, updated_at
            FROM profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(profile_from_row(&row)?),
            None => Err(StoreError::NotFound("profile not found".to_string())),
        }
    }

    /// Fetch a profile by its id
    pub async fn find_profile(&self, profile_id: Uuid) -> Result<Option<Profile>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, display_name, age, location, bio, photo_urls, interests,
                   is_verified, is_premium, is_active, profile_type, created_at, updated_at
            FROM profiles
            WHERE id = $1
            "#,
        )
        .bind(profile_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|row| profile_from_row(&row)).transpose().map_err(Into::into)
    }

    /// Create the subject's profile. The user_id column is unique, so a
    /// second creation for the same subject reports Duplicate.
    pub async fn create_profile(
        &self,
        user_id: &str,
        req: &CreateProfileRequest,
    ) -> Result<Profile, StoreError> {
        let row = sqlx::query(
            r#"
            INSERT INTO profiles (user_id, display_name, age, location, bio, photo_urls, interests, profile_type)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, user_id, display_name, age, location, bio, photo_urls, interests,
                      is_verified, is_premium, is_active, profile_type, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(&req.display_name)
        .bind(req.age)
        .bind(&req.location)
        .bind(&req.bio)
        .bind(&req.photo_urls)
        .bind(&req.interests)
        .bind(req.profile_type)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                StoreError::Duplicate("profile already exists".to_string())
            }
            _ => StoreError::Database(e),
        })?;

        Ok(profile_from_row(&row)?)
    }

    /// Partial update of a profile. Absent fields keep their current value.
    pub async fn update_profile(
        &self,
        profile_id: Uuid,
        req: &UpdateProfileRequest,
    ) -> Result<Profile, StoreError> {
        let row = sqlx::query(
            r#"
            UPDATE profiles SET
                display_name = COALESCE($2, display_name),
                age          = COALESCE($3, age),
                location     = COALESCE($4, location),
                bio          = COALESCE($5, bio),
                photo_urls   = COALESCE($6, photo_urls),
                interests    = COALESCE($7, interests),
                profile_type = COALESCE($8, profile_type),
                is_active    = COALESCE($9, is_active),
                updated_at   = NOW()
            WHERE id = $1
            RETURNING id, user_id, display_name, age, location, bio, photo_urls, interests,
                      is_verified, is_premium, is_active, profile_type, created_at, updated_at
            "#,
        )
        .bind(profile_id)
        .bind(&req.display_name)
        .bind(req.age)
        .bind(&req.location)
        .bind(&req.bio)
        .bind(&req.photo_urls)
        .bind(&req.interests)
        .bind(req.profile_type)
        .bind(req.is_active)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(profile_from_row(&row)?),
            None => Err(StoreError::NotFound("profile not found".to_string())),
        }
    }

    // --- Discovery ---

    /// Fetch a page of discovery candidates for a viewer.
    ///
    /// Excludes the viewer, inactive profiles, anyone with a swipe edge to or
    /// from the viewer, and anyone in a block relation with the viewer. The
    /// caller overfetches and re-filters in process before truncating to the
    /// public page size.
    pub async fn discovery_candidates(
        &self,
        viewer_id: Uuid,
        limit: i64,
    ) -> Result<Vec<Profile>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, display_name, age, location, bio, photo_urls, interests,
                   is_verified, is_premium, is_active, profile_type, created_at, updated_at
            FROM profiles p
            WHERE p.id <> $1
              AND p.is_active
              AND NOT EXISTS (
                  SELECT 1 FROM swipes s
                  WHERE (s.swiper_id = $1 AND s.swiped_id = p.id)
                     OR (s.swiper_id = p.id AND s.swiped_id = $1)
              )
              AND NOT EXISTS (
                  SELECT 1 FROM blocks b
                  WHERE (b.blocker_id = $1 AND b.blocked_id = p.id)
                     OR (b.blocker_id = p.id AND b.blocked_id = $1)
              )
            LIMIT $2
            "#,
        )
        .bind(viewer_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| profile_from_row(row).map_err(Into::into))
            .collect()
    }

    /// All profile ids the viewer has a swipe edge with, in either direction
    pub async fn swiped_profile_ids(&self, viewer_id: Uuid) -> Result<Vec<Uuid>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT swiped_id AS other_id FROM swipes WHERE swiper_id = $1
            UNION
            SELECT swiper_id AS other_id FROM swipes WHERE swiped_id = $1
            "#,
        )
        .bind(viewer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(|row| row.get("other_id")).collect())
    }

    /// All profile ids the viewer has a block relation with, in either direction
    pub async fn blocked_profile_ids(&self, viewer_id: Uuid) -> Result<Vec<Uuid>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT blocked_id AS other_id FROM blocks WHERE blocker_id = $1
            UNION
            SELECT blocker_id AS other_id FROM blocks WHERE blocked_id = $1
            "#,
        )
        .bind(viewer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(|row| row.get("other_id")).collect())
    }

    // --- Swipes and matches ---

    /// Record a swipe and resolve reciprocity in one transaction.
    ///
    /// The swipe edge is unique and immutable: a repeated swipe on the same
    /// pair returns the original row. After a like, the reverse edge is
    /// checked and, if it is also a like, the match row is created in the
    /// same transaction; the normalized-pair unique constraint makes that
    /// creation idempotent under concurrent mutual likes.
    pub async fn record_swipe(
        &self,
        swiper_id: Uuid,
        swiped_id: Uuid,
        action: SwipeAction,
    ) -> Result<(Swipe, bool), StoreError> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO swipes (swiper_id, swiped_id, action)
            VALUES ($1, $2, $3)
            ON CONFLICT (swiper_id, swiped_id) DO NOTHING
            RETURNING id, swiper_id, swiped_id, action, created_at
            "#,
        )
        .bind(swiper_id)
        .bind(swiped_id)
        .bind(action)
        .fetch_optional(&mut *tx)
        .await?;

        let swipe = match inserted {
            Some(row) => swipe_from_row(&row)?,
            None => {
                // Edge already exists; it is immutable, so return it as-is.
                let row = sqlx::query(
                    r#"
                    SELECT id, swiper_id, swiped_id, action, created_at
                    FROM swipes
                    WHERE swiper_id = $1 AND swiped_id = $2
                    "#,
                )
                .bind(swiper_id)
                .bind(swiped_id)
                .fetch_one(&mut *tx)
                .await?;
                swipe_from_row(&row)?
            }
        };

        let reverse: Option<SwipeAction> = sqlx::query(
            r#"
            SELECT action FROM swipes
            WHERE swiper_id = $1 AND swiped_id = $2
            "#,
        )
        .bind(swiped_id)
        .bind(swiper_id)
        .fetch_optional(&mut *tx)
        .await?
        .map(|row| row.get("action"));

        let is_match = is_mutual_like(swipe.action, reverse);

        if is_match {
            let (profile_a, profile_b) = normalize_pair(swiper_id, swiped_id);
            sqlx::query(
                r#"
                INSERT INTO matches (profile_a, profile_b)
                VALUES ($1, $2)
                ON CONFLICT (profile_a, profile_b) DO NOTHING
                "#,
            )
            .bind(profile_a)
            .bind(profile_b)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::debug!(
            "recorded swipe {} -> {} ({:?}, match: {})",
            swiper_id,
            swiped_id,
            swipe.action,
            is_match
        );

        Ok((swipe, is_match))
    }

    /// List a profile's matches, newest first, with both participants joined
    pub async fn list_matches(
        &self,
        profile_id: Uuid,
    ) -> Result<Vec<MatchWithProfiles>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, profile_a, profile_b, created_at
            FROM matches
            WHERE profile_a = $1 OR profile_b = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(profile_id)
        .fetch_all(&self.pool)
        .await?;

        let matches: Vec<Match> = rows
            .iter()
            .map(|row| {
                Ok(Match {
                    id: row.try_get("id")?,
                    profile_a: row.try_get("profile_a")?,
                    profile_b: row.try_get("profile_b")?,
                    created_at: row.try_get("created_at")?,
                })
            })
            .collect::<Result<_, sqlx::Error>>()?;

        if matches.is_empty() {
            return Ok(vec![]);
        }

        let mut participant_ids: Vec<Uuid> = Vec::with_capacity(matches.len() * 2);
        for m in &matches {
            participant_ids.push(m.profile_a);
            participant_ids.push(m.profile_b);
        }

        let profile_rows = sqlx::query(
            r#"
            SELECT id, user_id, display_name, age, location, bio, photo_urls, interests,
                   is_verified, is_premium, is_active, profile_type, created_at, updated_at
            FROM profiles
            WHERE id = ANY($1)
            "#,
        )
        .bind(&participant_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut profiles: HashMap<Uuid, Profile> = HashMap::with_capacity(profile_rows.len());
        for row in &profile_rows {
            let profile = profile_from_row(row)?;
            profiles.insert(profile.id, profile);
        }

        let mut result = Vec::with_capacity(matches.len());
        for m in matches {
            match (profiles.get(&m.profile_a), profiles.get(&m.profile_b)) {
                (Some(a), Some(b)) => result.push(MatchWithProfiles {
                    id: m.id,
                    matched_at: m.created_at,
                    profiles: vec![a.clone(), b.clone()],
                }),
                _ => {
                    tracing::warn!("match {} references a missing profile, skipping", m.id);
                }
            }
        }

        Ok(result)
    }

    /// Fetch a match by id
    pub async fn find_match(&self, match_id: Uuid) -> Result<Option<Match>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, profile_a, profile_b, created_at
            FROM matches
            WHERE id = $1
            "#,
        )
        .bind(match_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|row| {
            Ok(Match {
                id: row.try_get("id")?,
                profile_a: row.try_get("profile_a")?,
                profile_b: row.try_get("profile_b")?,
                created_at: row.try_get("created_at")?,
            })
        })
        .transpose()
        .map_err(|e: sqlx::Error| e.into())
    }

    // --- Messages ---

    /// Append a message to a match conversation
    pub async fn insert_message(
        &self,
        match_id: Uuid,
        sender_id: Uuid,
        content: &str,
        kind: MessageKind,
    ) -> Result<Message, StoreError> {
        let row = sqlx::query(
            r#"
            INSERT INTO messages (match_id, sender_id, content, kind)
            VALUES ($1, $2, $3, $4)
            RETURNING id, match_id, sender_id, content, kind, is_read, created_at
            "#,
        )
        .bind(match_id)
        .bind(sender_id)
        .bind(content)
        .bind(kind)
        .fetch_one(&self.pool)
        .await?;

        Ok(message_from_row(&row)?)
    }

    /// List a match's messages in ascending creation order
    pub async fn list_messages(&self, match_id: Uuid) -> Result<Vec<Message>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, match_id, sender_id, content, kind, is_read, created_at
            FROM messages
            WHERE match_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(match_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| message_from_row(row).map_err(Into::into))
            .collect()
    }

    /// Fetch a message by id
    pub async fn find_message(&self, message_id: Uuid) -> Result<Option<Message>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, match_id, sender_id, content, kind, is_read, created_at
            FROM messages
            WHERE id = $1
            "#,
        )
        .bind(message_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|row| message_from_row(&row)).transpose().map_err(Into::into)
    }

    /// Mark a message as read
    pub async fn mark_message_read(&self, message_id: Uuid) -> Result<Message, StoreError> {
        let row = sqlx::query(
            r#"
            UPDATE messages SET is_read = TRUE
            WHERE id = $1
            RETURNING id, match_id, sender_id, content, kind, is_read, created_at
            "#,
        )
        .bind(message_id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(message_from_row(&row)?),
            None => Err(StoreError::NotFound("message not found".to_string())),
        }
    }

    // --- Blocks and reports ---

    /// Create a block edge. Blocking the same profile twice returns the
    /// original edge.
    pub async fn insert_block(
        &self,
        blocker_id: Uuid,
        blocked_id: Uuid,
    ) -> Result<Block, StoreError> {
        let inserted = sqlx::query(
            r#"
            INSERT INTO blocks (blocker_id, blocked_id)
            VALUES ($1, $2)
            ON CONFLICT (blocker_id, blocked_id) DO NOTHING
            RETURNING id, blocker_id, blocked_id, created_at
            "#,
        )
        .bind(blocker_id)
        .bind(blocked_id)
        .fetch_optional(&self.pool)
        .await?;

        let row = match inserted {
            Some(row) => row,
            None => {
                sqlx::query(
                    r#"
                    SELECT id, blocker_id, blocked_id, created_at
                    FROM blocks
                    WHERE blocker_id = $1 AND blocked_id = $2
                    "#,
                )
                .bind(blocker_id)
                .bind(blocked_id)
                .fetch_one(&self.pool)
                .await?
            }
        };

        Ok(Block {
            id: row.try_get("id")?,
            blocker_id: row.try_get("blocker_id")?,
            blocked_id: row.try_get("blocked_id")?,
            created_at: row.try_get("created_at")?,
        })
    }

    /// Remove one of the caller's own block edges
    pub async fn delete_block(&self, block_id: Uuid, blocker_id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM blocks
            WHERE id = $1 AND blocker_id = $2
            "#,
        )
        .bind(block_id)
        .bind(blocker_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// File a report. Append-only.
    pub async fn insert_report(
        &self,
        reporter_id: Uuid,
        reported_id: Uuid,
        reason: &str,
    ) -> Result<Report, StoreError> {
        let row = sqlx::query(
            r#"
            INSERT INTO reports (reporter_id, reported_id, reason)
            VALUES ($1, $2, $3)
            RETURNING id, reporter_id, reported_id, reason, created_at
            "#,
        )
        .bind(reporter_id)
        .bind(reported_id)
        .bind(reason)
        .fetch_one(&self.pool)
        .await?;

        Ok(Report {
            id: row.try_get("id")?,
            reporter_id: row.try_get("reporter_id")?,
            reported_id: row.try_get("reported_id")?,
            reason: row.try_get("reason")?,
            created_at: row.try_get("created_at")?,
        })
    }

    // --- Interests ---

    /// Public lookup list for the interests picker
    pub async fn list_interests(&self) -> Result<Vec<Interest>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, category
            FROM interests
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                Ok(Interest {
                    id: row.try_get("id")?,
                    name: row.try_get("name")?,
                    category: row.try_get("category")?,
                })
            })
            .collect::<Result<_, sqlx::Error>>()
            .map_err(Into::into)
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

fn profile_from_row(row: &PgRow) -> Result<Profile, sqlx::Error> {
    Ok(Profile {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        display_name: row.try_get("display_name")?,
        age: row.try_get("age")?,
        location: row.try_get("location")?,
        bio: row.try_get("bio")?,
        photo_urls: row.try_get("photo_urls")?,
        interests: row.try_get("interests")?,
        is_verified: row.try_get("is_verified")?,
        is_premium: row.try_get("is_premium")?,
        is_active: row.try_get("is_active")?,
        profile_type: row.try_get("profile_type")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

fn swipe_from_row(row: &PgRow) -> Result<Swipe, sqlx::Error> {
    Ok(Swipe {
        id: row.try_get("id")?,
        swiper_id: row.try_get("swiper_id")?,
        swiped_id: row.try_get("swiped_id")?,
        action: row.try_get("action")?,
        created_at: row.try_get("created_at")?,
    })
}

fn message_from_row(row: &PgRow) -> Result<Message, sqlx::Error> {
    Ok(Message {
        id: row.try_get("id")?,
        match_id: row.try_get("match_id")?,
        sender_id: row.try_get("sender_id")?,
        content: row.try_get("content")?,
        kind: row.try_get("kind")?,
        is_read: row.try_get("is_read")?,
        created_at: row.try_get("created_at")?,
    })
}
