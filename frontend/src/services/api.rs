use gloo::net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use shared::{
    AssignmentRow, Class, CreateAssignmentRequest, CreateClassRequest, CreateFacultyRequest,
    CreateMarkRequest, CreateStudentRequest, CreateSubjectRequest, DashboardStats, ErrorResponse,
    Faculty, FacultyAssignment, Mark, MarkRow, MessageResponse, Student, Subject,
    UpdateStudentRequest,
};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// API client for communicating with the backend server
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    /// URL the browser can follow to download the server-side student export
    pub fn export_students_url(&self) -> String {
        self.url("/export/students")
    }

    async fn read<T: DeserializeOwned>(response: Response) -> Result<T, String> {
        if response.ok() {
            response
                .json::<T>()
                .await
                .map_err(|e| format!("Failed to parse response: {}", e))
        } else {
            let status = response.status();
            match response.json::<ErrorResponse>().await {
                Ok(body) => Err(body.error),
                Err(_) => Err(format!("Server error {}", status)),
            }
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        match Request::get(&self.url(path)).send().await {
            Ok(response) => Self::read(response).await,
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        body: &B,
    ) -> Result<T, String> {
        match builder
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => Self::read(response).await,
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    pub async fn list_students(&self) -> Result<Vec<Student>, String> {
        self.get("/students").await
    }

    pub async fn get_student(&self, usn: &str) -> Result<Student, String> {
        self.get(&format!("/students/{}", usn)).await
    }

    pub async fn create_student(&self, request: &CreateStudentRequest) -> Result<Student, String> {
        self.send_json(Request::post(&self.url("/students")), request).await
    }

    pub async fn update_student(&self, usn: &str, request: &UpdateStudentRequest) -> Result<Student, String> {
        let url = self.url(&format!("/students/{}", usn));
        self.send_json(Request::patch(&url), request).await
    }

    pub async fn delete_student(&self, usn: &str) -> Result<MessageResponse, String> {
        let url = self.url(&format!("/students/{}", usn));
        match Request::delete(&url).send().await {
            Ok(response) => Self::read(response).await,
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    pub async fn list_faculty(&self) -> Result<Vec<Faculty>, String> {
        self.get("/faculty").await
    }

    pub async fn create_faculty(&self, request: &CreateFacultyRequest) -> Result<Faculty, String> {
        self.send_json(Request::post(&self.url("/faculty")), request).await
    }

    pub async fn list_subjects(&self) -> Result<Vec<Subject>, String> {
        self.get("/subjects").await
    }

    pub async fn create_subject(&self, request: &CreateSubjectRequest) -> Result<Subject, String> {
        self.send_json(Request::post(&self.url("/subjects")), request).await
    }

    pub async fn list_classes(&self) -> Result<Vec<Class>, String> {
        self.get("/classes").await
    }

    pub async fn create_class(&self, request: &CreateClassRequest) -> Result<Class, String> {
        self.send_json(Request::post(&self.url("/classes")), request).await
    }

    pub async fn list_assignments(&self) -> Result<Vec<AssignmentRow>, String> {
        self.get("/assignments").await
    }

    pub async fn create_assignment(&self, request: &CreateAssignmentRequest) -> Result<FacultyAssignment, String> {
        self.send_json(Request::post(&self.url("/assignments")), request).await
    }

    pub async fn list_marks(&self) -> Result<Vec<MarkRow>, String> {
        self.get("/marks").await
    }

    pub async fn create_mark(&self, request: &CreateMarkRequest) -> Result<Mark, String> {
        self.send_json(Request::post(&self.url("/marks")), request).await
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, String> {
        self.get("/stats").await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_urls() {
        let client = ApiClient::with_base_url("http://records.local".to_string());
        assert_eq!(client.url("/students"), "http://records.local/api/students");
        assert_eq!(
            ApiClient::new().export_students_url(),
            "http://localhost:3000/api/export/students"
        );
    }
}
