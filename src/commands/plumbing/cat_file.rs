use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;

impl Repository {
    /// Decoded body of the object a full or abbreviated id names
    pub fn cat_file(&self, object_id: &str) -> anyhow::Result<String> {
        self.ensure_initialized()?;

        let oid = Revision::try_parse(object_id)?.resolve(self.database(), None)?;
        let object = self.database().parse_object(&oid)?;

        Ok(object.display())
    }
}
