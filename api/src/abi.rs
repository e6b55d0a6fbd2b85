//! Solidity bindings for the UniversityFundraiser contract.
//!
//! Only the functions the client calls are declared. Names and parameter
//! types must match the deployed contract exactly, otherwise the node
//! rejects the call as an unknown selector.

use alloy_sol_types::sol;

sol! {
    function getCampaignCount() external view returns (uint256 count);

    function getCampaignDetails(uint256 id) external view returns (
        string title,
        string description,
        uint256 goal,
        uint256 raised,
        uint256 deadline,
        string imageURL,
        address creator,
        bool isClosed
    );

    function createCampaign(
        string title,
        string description,
        uint256 goal,
        uint256 durationDays,
        address beneficiary,
        string imageURL
    ) external;

    function donate(uint256 id) external payable;

    function withdrawFunds(uint256 id) external;
}
