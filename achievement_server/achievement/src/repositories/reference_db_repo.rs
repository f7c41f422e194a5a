/*
 * Copyright (c) Huawei Technologies Co., Ltd. 2025. All rights reserved.
 * Global Trust Authority is licensed under the Mulan PSL v2.
 * You can use this software according to the terms and conditions of the Mulan PSL v2.
 * You may obtain a copy of Mulan PSL v2 at:
 *     http://license.coscl.org.cn/MulanPSL2
 * THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND, EITHER EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT, MERCHANTABILITY OR FIT FOR A PARTICULAR
 * PURPOSE.
 * See the Mulan PSL v2 for more details.
 */

use std::sync::Arc;
use account::entities::db_model::{lecturer_db_model, student_db_model};
use account::Page;
use async_trait::async_trait;
use jwt::{Principal, Role};
use log::{info, warn};
use sea_orm::sea_query::{Expr, Query, SelectStatement, SimpleExpr};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, QuerySelect, Select};
use crate::entities::db_model::reference_db_model::{Column, Entity, Model};
use crate::entities::inner_model::achievement_view::ReferenceSummary;
use crate::entities::status::{AchievementStatus, LifecycleEvent};
use crate::error::achievement_error::AchievementError;
use crate::stores::reference_store::ReferenceStore;

/// `ReferenceStore` over the `achievement_references` table.
pub struct ReferenceDbRepo {
    db: Arc<DatabaseConnection>,
}

impl ReferenceDbRepo {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// `SELECT id FROM students WHERE user_id = ?`
    fn students_of_user(user_id: &str) -> SelectStatement {
        Query::select()
            .column(student_db_model::Column::Id)
            .from(student_db_model::Entity)
            .and_where(Expr::col(student_db_model::Column::UserId).eq(user_id))
            .to_owned()
    }

    /// Students whose advisor row belongs to the lecturer account `user_id`.
    fn students_advised_by(user_id: &str) -> SelectStatement {
        Query::select()
            .column((student_db_model::Entity, student_db_model::Column::Id))
            .from(student_db_model::Entity)
            .inner_join(
                lecturer_db_model::Entity,
                Expr::col((lecturer_db_model::Entity, lecturer_db_model::Column::Id))
                    .equals((student_db_model::Entity, student_db_model::Column::AdvisorId)),
            )
            .and_where(Expr::col((lecturer_db_model::Entity, lecturer_db_model::Column::UserId)).eq(user_id))
            .to_owned()
    }

    fn visible() -> Select<Entity> {
        Entity::find().filter(Column::Status.ne(AchievementStatus::Deleted.as_str()))
    }

    async fn summaries(&self, query: Select<Entity>) -> Result<Vec<ReferenceSummary>, AchievementError> {
        let rows = query.order_by_desc(Column::CreatedAt).all(&*self.db).await?;
        Ok(rows.into_iter().map(ReferenceSummary::from).collect())
    }

    /// One `UPDATE ... WHERE id = ? AND status = <required> AND student_id IN (<owner>)`.
    async fn transition(
        &self,
        ref_id: &str,
        event: LifecycleEvent,
        owner: SelectStatement,
        now: i64,
        extra: Vec<(Column, SimpleExpr)>,
    ) -> Result<(), AchievementError> {
        let mut update = Entity::update_many()
            .col_expr(Column::Status, Expr::value(event.target_status().as_str()))
            .col_expr(Column::UpdatedAt, Expr::value(now));
        for (column, value) in extra {
            update = update.col_expr(column, value);
        }
        let result = update
            .filter(Column::Id.eq(ref_id))
            .filter(Column::Status.eq(event.required_status().as_str()))
            .filter(Column::StudentId.in_subquery(owner))
            .exec(&*self.db)
            .await?;
        if result.rows_affected == 0 {
            warn!("{} on achievement {} matched no row", event.name(), ref_id);
            return Err(AchievementError::not_found());
        }
        info!("achievement {} is now {}", ref_id, event.target_status());
        Ok(())
    }
}

#[async_trait]
impl ReferenceStore for ReferenceDbRepo {
    async fn create_draft(&self, ref_id: &str, student_id: &str, detail_ref_id: &str) -> Result<String, AchievementError> {
        let now = chrono::Utc::now().timestamp_millis();
        let model = Model {
            id: ref_id.to_string(),
            student_id: student_id.to_string(),
            status: AchievementStatus::Draft,
            detail_ref_id: Some(detail_ref_id.to_string()),
            rejection_note: None,
            created_at: now,
            submitted_at: None,
            verified_at: None,
            verified_by: None,
            rejected_at: None,
            updated_at: now,
        };
        Entity::insert(model.into_active_model()).exec_without_returning(&*self.db).await?;
        Ok(ref_id.to_string())
    }

    async fn link_detail(&self, ref_id: &str, detail_ref_id: &str) -> Result<(), AchievementError> {
        let result = Entity::update_many()
            .col_expr(Column::DetailRefId, Expr::value(detail_ref_id))
            .col_expr(Column::UpdatedAt, Expr::value(chrono::Utc::now().timestamp_millis()))
            .filter(Column::Id.eq(ref_id))
            .exec(&*self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(AchievementError::not_found());
        }
        Ok(())
    }

    async fn get_status(&self, ref_id: &str) -> Result<Option<AchievementStatus>, AchievementError> {
        let row = Entity::find_by_id(ref_id.to_string()).one(&*self.db).await?;
        Ok(row.map(|r| r.status))
    }

    async fn list_all(&self) -> Result<Vec<ReferenceSummary>, AchievementError> {
        self.summaries(Self::visible()).await
    }

    async fn list_by_student(&self, user_id: &str) -> Result<Vec<ReferenceSummary>, AchievementError> {
        self.summaries(Self::visible().filter(Column::StudentId.in_subquery(Self::students_of_user(user_id))))
            .await
    }

    async fn list_by_advisor(&self, user_id: &str) -> Result<Vec<ReferenceSummary>, AchievementError> {
        self.summaries(Self::visible().filter(Column::StudentId.in_subquery(Self::students_advised_by(user_id))))
            .await
    }

    async fn list_by_student_id(&self, student_id: &str, page: Page) -> Result<Vec<ReferenceSummary>, AchievementError> {
        let query = Self::visible()
            .filter(Column::StudentId.eq(student_id))
            .limit(page.limit)
            .offset(page.offset);
        self.summaries(query).await
    }

    async fn resolve_for_read(&self, ref_id: &str, principal: &Principal) -> Result<Model, AchievementError> {
        let mut query = Self::visible().filter(Column::Id.eq(ref_id));
        match principal.role {
            Role::Admin => {},
            Role::Student => {
                query = query.filter(Column::StudentId.in_subquery(Self::students_of_user(&principal.user_id)));
            },
            Role::Advisor => {
                query = query.filter(Column::StudentId.in_subquery(Self::students_advised_by(&principal.user_id)));
            },
        }
        query.one(&*self.db).await?.ok_or_else(AchievementError::not_found)
    }

    async fn submit(&self, ref_id: &str, student_user_id: &str) -> Result<(), AchievementError> {
        let now = chrono::Utc::now().timestamp_millis();
        let extra = vec![(Column::SubmittedAt, Expr::value(now))];
        self.transition(ref_id, LifecycleEvent::Submit, Self::students_of_user(student_user_id), now, extra)
            .await
    }

    async fn soft_delete(&self, ref_id: &str, student_user_id: &str) -> Result<(), AchievementError> {
        let now = chrono::Utc::now().timestamp_millis();
        self.transition(ref_id, LifecycleEvent::Delete, Self::students_of_user(student_user_id), now, Vec::new())
            .await
    }

    async fn verify(&self, ref_id: &str, advisor_user_id: &str) -> Result<(), AchievementError> {
        let now = chrono::Utc::now().timestamp_millis();
        let extra = vec![
            (Column::VerifiedAt, Expr::value(now)),
            (Column::VerifiedBy, Expr::value(advisor_user_id)),
        ];
        self.transition(ref_id, LifecycleEvent::Verify, Self::students_advised_by(advisor_user_id), now, extra)
            .await
    }

    async fn reject(&self, ref_id: &str, advisor_user_id: &str, note: &str) -> Result<(), AchievementError> {
        let now = chrono::Utc::now().timestamp_millis();
        let extra = vec![
            (Column::RejectionNote, Expr::value(note)),
            (Column::RejectedAt, Expr::value(now)),
        ];
        self.transition(ref_id, LifecycleEvent::Reject, Self::students_advised_by(advisor_user_id), now, extra)
            .await
    }
}
