//! Seed command - loads the stock catalog and an optional bootstrap admin.

use std::sync::Arc;

use crate::cli::args::SeedArgs;
use crate::config::Config;
use crate::domain::{
    AccountStatus, AppRole, Password, SoftwareDraft, TopicDraft, TopicStatus,
};
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, Persistence, UnitOfWork};

/// Execute the seed command
pub async fn execute(args: SeedArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config).await;
    let uow = Arc::new(Persistence::new(db.get_connection()));

    seed_topics(&uow).await?;
    seed_software(&uow).await?;

    if let (Some(email), Some(password)) = (args.admin_email, args.admin_password) {
        seed_admin(&uow, email, password).await?;
    }

    tracing::info!("Seeding complete");
    Ok(())
}

async fn seed_topics(uow: &Arc<Persistence>) -> AppResult<()> {
    if !uow.topics().list().await?.is_empty() {
        tracing::info!("Topics already present, skipping");
        return Ok(());
    }

    let stock: [(&str, &str, &str, &str, &str); 9] = [
        (
            "Sales Content",
            "Content Bán Hàng",
            "Content templates for direct sales and closing deals",
            "ShoppingCart",
            "primary",
        ),
        (
            "Customer Care",
            "Content Chăm Sóc Khách Hàng",
            "Templates for customer support and follow-up",
            "HeartHandshake",
            "info",
        ),
        (
            "Seeding Content",
            "Content Seeding",
            "Organic engagement and community building",
            "Sprout",
            "success",
        ),
        (
            "Personal Branding",
            "Content Thương Hiệu Cá Nhân Sales",
            "Build your personal brand as a sales professional",
            "User",
            "warning",
        ),
        (
            "Case Studies",
            "Content Feedback – Case Study",
            "Success stories and customer testimonials",
            "Star",
            "primary",
        ),
        (
            "Promotions",
            "Content Khuyến Mãi",
            "Promotional offers and discount announcements",
            "Gift",
            "destructive",
        ),
        (
            "Motivation",
            "Content Cảm Xúc – Động Lực",
            "Inspirational and motivational content",
            "Flame",
            "warning",
        ),
        (
            "Industry Specific",
            "Content Theo Ngành",
            "Content tailored to specific industries",
            "Building2",
            "info",
        ),
        (
            "By Software",
            "Content Theo Phần Mềm",
            "Content organized by MKT software products",
            "Boxes",
            "success",
        ),
    ];

    for (name, name_vi, description, icon, color) in stock {
        uow.topics()
            .insert(TopicDraft {
                name: name.to_string(),
                name_vi: name_vi.to_string(),
                description: description.to_string(),
                icon: icon.to_string(),
                color: color.to_string(),
                status: TopicStatus::Active,
            })
            .await?;
    }

    tracing::info!("Seeded {} topics", stock.len());
    Ok(())
}

async fn seed_software(uow: &Arc<Persistence>) -> AppResult<()> {
    if !uow.software().list().await?.is_empty() {
        tracing::info!("Software already present, skipping");
        return Ok(());
    }

    let stock: [(&str, &str, &str); 5] = [
        ("MKT Care", "Customer care automation tool", "Chăm sóc"),
        ("MKT UID", "User ID extraction and management", "Data"),
        ("MKT Viral", "Viral content distribution", "Marketing"),
        ("MKT Data", "Data analytics and insights", "Analytics"),
        ("MKT Group", "Group management tool", "Community"),
    ];

    for (name, description, tag) in stock {
        uow.software()
            .insert(SoftwareDraft {
                name: name.to_string(),
                description: description.to_string(),
                tag: tag.to_string(),
                status: TopicStatus::Active,
            })
            .await?;
    }

    tracing::info!("Seeded {} software entries", stock.len());
    Ok(())
}

async fn seed_admin(uow: &Arc<Persistence>, email: String, password: String) -> AppResult<()> {
    if uow.users().find_by_email(&email).await?.is_some() {
        tracing::info!("Admin account already exists, skipping");
        return Ok(());
    }

    let password_hash = Password::new(&password)
        .map_err(|_| AppError::validation("Admin password does not meet requirements"))?
        .into_string();

    let user = uow
        .users()
        .create_account(email, password_hash, Some("Administrator".to_string()))
        .await?;

    uow.users()
        .set_status(user.id, AccountStatus::Active)
        .await?;
    uow.users()
        .set_role(user.id, Some(AppRole::Admin))
        .await?;

    tracing::info!("Bootstrap admin created");
    Ok(())
}
