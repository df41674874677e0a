use crate::areas::database::Database;
use crate::artifacts::branch::{ANCESTOR_REGEX, PARENT_REGEX};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::RepositoryError;
use anyhow::Context;

/// Shortest abbreviated object id accepted on the command line
pub const MIN_PREFIX_LENGTH: usize = 4;

/// A way of naming a stored object on the command line
///
/// Supported forms:
/// - Full or abbreviated object ids: `3f2a91c`, at least 4 hex characters
/// - Parent notation: `<revision>^` (e.g. `3f2a91c^`)
/// - Ancestor notation: `<revision>~<n>` (e.g. `3f2a91c~2`), following primary parents
///
/// Only the plain id form may name a blob; parent and ancestor steps always walk commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revision {
    Oid(String),
    Parent(Box<Revision>),
    Ancestor(Box<Revision>, usize),
}

impl Revision {
    pub fn try_parse(revision: &str) -> anyhow::Result<Revision> {
        let parent_re = regex::Regex::new(PARENT_REGEX)
            .with_context(|| format!("invalid parent regex: {PARENT_REGEX}"))?;
        let ancestor_re = regex::Regex::new(ANCESTOR_REGEX)
            .with_context(|| format!("invalid ancestor regex: {ANCESTOR_REGEX}"))?;

        if let Some(caps) = parent_re.captures(revision) {
            Ok(Revision::Parent(Box::new(Self::try_parse(&caps[1])?)))
        } else if let Some(caps) = ancestor_re.captures(revision) {
            let generations: usize = caps[2]
                .parse()
                .with_context(|| format!("failed to parse generations in revision: {revision}"))?;

            Ok(Revision::Ancestor(
                Box::new(Self::try_parse(&caps[1])?),
                generations,
            ))
        } else if Self::looks_like_oid(revision) {
            Ok(Revision::Oid(revision.to_ascii_lowercase()))
        } else {
            Err(RepositoryError::NoSuchCommit {
                id: revision.to_string(),
            }
            .into())
        }
    }

    /// Resolve to a commit id
    pub fn resolve_commit(&self, database: &Database) -> anyhow::Result<ObjectId> {
        self.resolve(database, Some(ObjectType::Commit))
    }

    /// Resolve to an object id, restricting plain ids to `wanted` when given
    pub fn resolve(
        &self,
        database: &Database,
        wanted: Option<ObjectType>,
    ) -> anyhow::Result<ObjectId> {
        match self {
            Revision::Oid(prefix) => Self::resolve_oid(prefix, database, wanted),
            Revision::Parent(base) => {
                Self::resolve_commit_parent(base.resolve_commit(database)?, database)
            }
            Revision::Ancestor(base, generations) => {
                let mut oid = base.resolve_commit(database)?;
                for _ in 0..*generations {
                    oid = Self::resolve_commit_parent(oid, database)?;
                }

                Ok(oid)
            }
        }
    }

    fn resolve_commit_parent(oid: ObjectId, database: &Database) -> anyhow::Result<ObjectId> {
        database
            .load_commit(&oid)?
            .parent()
            .cloned()
            .ok_or_else(|| {
                RepositoryError::NoSuchCommit {
                    id: format!("{}^", oid.to_short_oid()),
                }
                .into()
            })
    }

    fn resolve_oid(
        prefix: &str,
        database: &Database,
        wanted: Option<ObjectType>,
    ) -> anyhow::Result<ObjectId> {
        let candidates = database
            .find_objects_by_prefix(prefix)?
            .into_iter()
            .map(|oid| Ok((database.get_object_type(&oid)?, oid)))
            .collect::<anyhow::Result<Vec<_>>>()?
            .into_iter()
            .filter(|(object_type, _)| wanted.is_none_or(|wanted| wanted == *object_type))
            .map(|(_, oid)| oid)
            .collect::<Vec<_>>();

        match candidates.as_slice() {
            [] => Err(RepositoryError::NoSuchCommit {
                id: prefix.to_string(),
            }
            .into()),
            [oid] => Ok(oid.clone()),
            _ => Err(RepositoryError::AmbiguousCommitId {
                prefix: prefix.to_string(),
                candidates: candidates.iter().map(ObjectId::to_string).collect(),
            }
            .into()),
        }
    }

    fn looks_like_oid(s: &str) -> bool {
        s.len() >= MIN_PREFIX_LENGTH && s.len() <= 40 && ObjectId::is_hex(s)
    }
}
