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

use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ColumnTrait, Condition, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, QuerySelect};
use crate::entities::db_model::user_db_model::{Column, Entity, Model};
use crate::entities::inner_model::page::Page;
use crate::entities::request_body::user_req_body::UpdateUserReqBody;
use crate::error::account_error::AccountError;

pub struct UserRepository {}

impl UserRepository {
    /// Lists users newest first; a non-empty `search` matches username, email or full name
    /// case-insensitively.
    pub async fn list(db: &DatabaseConnection, search: &str, page: Page) -> Result<Vec<Model>, AccountError> {
        let mut query = Entity::find();
        let search = search.trim();
        if !search.is_empty() {
            let pattern = format!("%{}%", search.to_lowercase());
            let condition = Condition::any()
                .add(Expr::expr(Func::lower(Expr::col(Column::Username))).like(pattern.as_str()))
                .add(Expr::expr(Func::lower(Expr::col(Column::Email))).like(pattern.as_str()))
                .add(Expr::expr(Func::lower(Expr::col(Column::FullName))).like(pattern.as_str()));
            query = query.filter(condition);
        }
        Ok(query
            .order_by_desc(Column::CreatedAt)
            .limit(page.limit)
            .offset(page.offset)
            .all(db)
            .await?)
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: &str) -> Result<Option<Model>, AccountError> {
        Ok(Entity::find_by_id(id.to_string()).one(db).await?)
    }

    pub async fn find_by_ids(db: &DatabaseConnection, ids: Vec<String>) -> Result<Vec<Model>, AccountError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        Ok(Entity::find().filter(Column::Id.is_in(ids)).all(db).await?)
    }

    /// Login lookup: `identifier` is matched against username or email.
    pub async fn find_by_identifier(db: &DatabaseConnection, identifier: &str) -> Result<Option<Model>, AccountError> {
        Ok(Entity::find()
            .filter(Condition::any().add(Column::Username.eq(identifier)).add(Column::Email.eq(identifier)))
            .one(db)
            .await?)
    }

    pub async fn insert(db: &DatabaseConnection, model: Model) -> Result<(), AccountError> {
        Entity::insert(model.into_active_model()).exec_without_returning(db).await?;
        Ok(())
    }

    /// Applies the supplied fields only; returns the number of rows touched.
    pub async fn update_fields(
        db: &DatabaseConnection,
        id: &str,
        body: &UpdateUserReqBody,
        now: i64,
    ) -> Result<u64, AccountError> {
        let mut update = Entity::update_many().col_expr(Column::UpdatedAt, Expr::value(now));
        if let Some(username) = &body.username {
            update = update.col_expr(Column::Username, Expr::value(username.trim()));
        }
        if let Some(email) = &body.email {
            update = update.col_expr(Column::Email, Expr::value(email.trim()));
        }
        if let Some(full_name) = &body.full_name {
            update = update.col_expr(Column::FullName, Expr::value(full_name.trim()));
        }
        if let Some(is_active) = body.is_active {
            update = update.col_expr(Column::IsActive, Expr::value(is_active));
        }
        let result = update.filter(Column::Id.eq(id)).exec(db).await?;
        Ok(result.rows_affected)
    }

    pub async fn deactivate(db: &DatabaseConnection, id: &str, now: i64) -> Result<u64, AccountError> {
        let result = Entity::update_many()
            .col_expr(Column::IsActive, Expr::value(false))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(db)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn set_role(db: &DatabaseConnection, id: &str, role_id: &str, now: i64) -> Result<u64, AccountError> {
        let result = Entity::update_many()
            .col_expr(Column::RoleId, Expr::value(role_id))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(db)
            .await?;
        Ok(result.rows_affected)
    }
}
