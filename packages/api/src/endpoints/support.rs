use super::Data;
use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{ReplyRequest, SupportTicket, TicketStats, TicketUpdate, TicketsPage, TicketsQuery};

impl ApiClient {
    pub async fn tickets(&self, query: &TicketsQuery) -> Result<TicketsPage> {
        let request = self
            .get("/api/support/admin/tickets")
            .query(&query.to_params());
        let payload: Data<TicketsPage> = self.send(request, "fetch tickets").await?;
        Ok(payload.data)
    }

    pub async fn ticket_statistics(&self) -> Result<TicketStats> {
        let request = self.get("/api/support/admin/statistics");
        let payload: Data<TicketStats> = self.send(request, "fetch ticket statistics").await?;
        Ok(payload.data)
    }

    /// Full ticket with its reply thread. Keyed by `ticketId`, not the row id.
    pub async fn ticket(&self, ticket_id: &str) -> Result<SupportTicket> {
        let request = self.get(&format!("/api/support/ticket/{ticket_id}"));
        let payload: Data<SupportTicket> = self.send(request, "fetch ticket").await?;
        Ok(payload.data)
    }

    pub async fn update_ticket(&self, ticket_id: &str, update: &TicketUpdate) -> Result<()> {
        tracing::info!(
            "Updating ticket {ticket_id}: status={} priority={}",
            update.status,
            update.priority
        );
        let request = self
            .patch(&format!("/api/support/admin/ticket/{ticket_id}/update"))
            .json(update);
        self.send_ack(request, "update ticket").await
    }

    pub async fn reply_to_ticket(&self, ticket_id: &str, reply: &ReplyRequest) -> Result<()> {
        tracing::info!(
            "Replying to ticket {ticket_id}{}",
            if reply.is_internal { " (internal)" } else { "" }
        );
        let request = self
            .post(&format!("/api/support/ticket/{ticket_id}/reply"))
            .json(reply);
        self.send_ack(request, "reply to ticket").await
    }
}
