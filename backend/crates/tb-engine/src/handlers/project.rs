use crate::handlers::lookup::load_project;
use crate::validation::Validator;
use crate::{EngineError, HandlerContext, Result as EngineErrorResult, db_read, db_write};

use tb_core::{MemberRole, Project, ProjectMember, Status};
use tb_db::{ProjectMemberRepository, ProjectRepository, StatusRepository};

use log::{debug, info};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateProjectInput {
    pub key: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AddMemberInput {
    pub user_id: Uuid,
    pub role: MemberRole,
}

/// Creates a project with the default status set. The creator joins as admin.
pub async fn create_project(
    ctx: &HandlerContext,
    input: CreateProjectInput,
) -> EngineErrorResult<Project> {
    debug!("{} CreateProject starting", ctx.log_prefix());

    let validator = Validator::new(&ctx.validation);
    let key = input.key.trim().to_string();
    Project::validate_key(&key)?;
    let name = validator.title(&input.name, "name")?;
    validator.description(input.description.as_deref(), "description")?;

    let project = Project::new(key, name, input.description, ctx.user_id);
    let statuses = Status::defaults(project.id);
    let creator = ProjectMember::new(project.id, ctx.user_id, MemberRole::Admin);

    let (project_ref, statuses_ref, creator_ref) = (&project, &statuses, &creator);
    db_write(ctx, "CreateProject", move || {
        insert_project(ctx, project_ref, statuses_ref, creator_ref)
    })
    .await?;

    info!(
        "{} Created project {} ({})",
        ctx.log_prefix(),
        project.key,
        project.id
    );

    Ok(project)
}

async fn insert_project(
    ctx: &HandlerContext,
    project: &Project,
    statuses: &[Status],
    creator: &ProjectMember,
) -> EngineErrorResult<()> {
    let mut tx = ctx.pool.begin().await?;

    ProjectRepository::create(&mut *tx, project)
        .await
        .map_err(|e| {
            if e.is_unique_violation() {
                EngineError::conflict(format!("project key '{}' is already taken", project.key))
            } else {
                EngineError::from(e)
            }
        })?;

    for status in statuses {
        StatusRepository::create(&mut *tx, status).await?;
    }
    ProjectMemberRepository::upsert(&mut *tx, creator).await?;

    tx.commit().await?;
    Ok(())
}

pub async fn get_project(ctx: &HandlerContext) -> EngineErrorResult<Project> {
    let project_id = ctx.project()?;

    db_read(ctx, "GetProject", move || async move {
        let mut conn = ctx.pool.acquire().await?;
        load_project(&mut conn, project_id).await
    })
    .await
}

pub async fn list_projects(ctx: &HandlerContext) -> EngineErrorResult<Vec<Project>> {
    db_read(ctx, "ListProjects", move || async move {
        Ok::<_, EngineError>(ProjectRepository::list(&ctx.pool).await?)
    })
    .await
}

/// Adds a member, or changes the role of an existing one.
pub async fn add_member(
    ctx: &HandlerContext,
    input: AddMemberInput,
) -> EngineErrorResult<ProjectMember> {
    debug!("{} AddMember starting", ctx.log_prefix());

    let project_id = ctx.project()?;
    let member = ProjectMember::new(project_id, input.user_id, input.role);

    let member_ref = &member;
    db_write(ctx, "AddMember", move || async move {
        let mut tx = ctx.pool.begin().await?;
        if !ProjectRepository::bump_revision(&mut *tx, project_id).await? {
            return Err(EngineError::not_found(format!(
                "project {} not found",
                project_id
            )));
        }
        ProjectMemberRepository::upsert(&mut *tx, member_ref).await?;
        tx.commit().await?;
        Ok(())
    })
    .await?;

    info!(
        "{} Added member {} as {}",
        ctx.log_prefix(),
        member.user_id,
        member.role.as_str()
    );

    Ok(member)
}

pub async fn list_members(ctx: &HandlerContext) -> EngineErrorResult<Vec<ProjectMember>> {
    let project_id = ctx.project()?;

    db_read(ctx, "ListMembers", move || async move {
        let mut conn = ctx.pool.acquire().await?;
        load_project(&mut conn, project_id).await?;
        Ok::<_, EngineError>(
            ProjectMemberRepository::list_by_project(&mut *conn, project_id).await?,
        )
    })
    .await
}
