use super::ApiRequest;

/// Advertiser programs open for affiliation.
#[derive(Debug, Clone)]
pub struct ListPrograms;

impl ApiRequest for ListPrograms {
    fn path(&self) -> String {
        "programs".to_string()
    }
}

#[derive(Debug, Clone)]
pub struct GetProgram {
    pub id: u64,
}

impl ApiRequest for GetProgram {
    fn path(&self) -> String {
        format!("programs/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths() {
        assert_eq!(ListPrograms.path(), "programs");
        assert!(ListPrograms.params().is_empty());
        assert_eq!(GetProgram { id: 5 }.path(), "programs/5");
        assert!(GetProgram { id: 5 }.params().is_empty());
    }
}
